use std::fmt;

use super::{node::HashNode, path, Side};
use crate::{
    error::{Error, Result},
    hash::Hasher,
};

/// Maximum number of aunts a proof may carry, far above the depth of any realistic tree.
pub const MAX_AUNTS: usize = 100;

/// A single aunt of a leaf in a hash tree.
///
/// It can be either `Aunt::Left(_)` or `Aunt::Right(_)` depending on which side of its parent it stands.
#[derive(Debug)]
enum Aunt<'p, H: Hasher> {
    Left(&'p H::Hash),
    Right(&'p H::Hash),
}

impl<H: Hasher> Aunt<'_, H> {
    /// Compute the parent hash of this aunt and the given sibling hash, depending on its position in the hash tree.
    fn hash(&self, other: &H::Hash) -> H::Hash {
        match self {
            Self::Left(hash) => H::inner_hash(hash, other),
            Self::Right(hash) => H::inner_hash(other, hash),
        }
    }
}

/// Number of aunts proving the leaf at `index` in a tree of `total` items, ie. the depth of that leaf.
pub fn expected_aunts(index: usize, total: usize) -> usize {
    path(index, total).len()
}

/// An inclusion proof.
///
/// It holds all aunt hashes required to compute the root hash of a tree of `total` items from the leaf hash of the
/// item at `index`. Aunts are ordered bottom-up, the sibling of the leaf coming first.
#[derive(Debug)]
pub struct Proof<H: Hasher> {
    pub total: usize,
    pub index: usize,
    pub leaf_hash: H::Hash,
    pub aunts: Vec<H::Hash>,
}

/// Compute the root hash of the given items along with an inclusion proof for each of them.
///
/// The root hash is the one of [`hash_items`](super::hash_items), proofs are indexed like items.
pub fn build_proofs<H: Hasher>(items: &[impl AsRef<[u8]>]) -> (H::Hash, Vec<Proof<H>>) {
    let Some(root) = HashNode::<H>::build(items) else {
        return (H::empty_hash(), Vec::new());
    };

    let total = items.len();
    tracing::trace!(total, "building inclusion proofs");

    let proofs = root
        .leaves()
        .enumerate()
        .map(|(index, leaf)| Proof {
            total,
            index,
            leaf_hash: leaf.hash().clone(),
            aunts: root.aunts(index, total),
        })
        .collect();

    (root.hash().clone(), proofs)
}

impl<H: Hasher> Proof<H> {
    /// Check that `leaf` is the item at `index` in the tree of the given root hash.
    pub fn verify(&self, root_hash: &H::Hash, leaf: impl AsRef<[u8]>) -> Result<()> {
        let result = self.check(root_hash, leaf.as_ref());

        if let Err(err) = &result {
            tracing::debug!(index = self.index, total = self.total, %err, "inclusion proof rejected");
        }

        result
    }

    fn check(&self, root_hash: &H::Hash, leaf: &[u8]) -> Result<()> {
        self.check_index()?;

        let leaf_hash = H::leaf_hash(leaf);
        if leaf_hash != self.leaf_hash {
            return Err(Error::leaf_mismatch(&leaf_hash, &self.leaf_hash));
        }

        let computed_hash = self.compute_root_hash()?;
        if computed_hash != *root_hash {
            return Err(Error::root_mismatch(root_hash, &computed_hash));
        }

        Ok(())
    }

    /// Compute the root hash from the leaf hash and the aunts of this proof.
    ///
    /// The side of each aunt is not stored, it is derived from `index` and `total` using the split rule.
    pub fn compute_root_hash(&self) -> Result<H::Hash> {
        self.check_index()?;

        let path = path(self.index, self.total);
        if path.len() != self.aunts.len() {
            return Err(Error::InvalidProofLength { expected: path.len(), got: self.aunts.len() });
        }

        let root_hash = self
            .aunts
            .iter()
            .zip(path.into_iter().rev())
            .map(|(hash, side)| match side {
                Side::Left => Aunt::<H>::Right(hash),
                Side::Right => Aunt::<H>::Left(hash),
            })
            .fold(self.leaf_hash.clone(), |hash, aunt| aunt.hash(&hash));

        Ok(root_hash)
    }

    /// Perform the structural checks that don't require any root hash nor item.
    pub fn validate_basic(&self) -> Result<()> {
        self.check_index()?;

        if self.aunts.len() > MAX_AUNTS {
            return Err(Error::TooManyAunts { max: MAX_AUNTS, got: self.aunts.len() });
        }

        if let Some(expected) = H::output_size() {
            let invalid = std::iter::once(&self.leaf_hash)
                .chain(&self.aunts)
                .map(|hash| hash.as_ref().len())
                .find(|&got| got != expected);

            if let Some(got) = invalid {
                return Err(Error::InvalidDigestSize { expected, got });
            }
        }

        Ok(())
    }

    fn check_index(&self) -> Result<()> {
        match self.index < self.total {
            true => Ok(()),
            false => Err(Error::IndexOutOfRange { index: self.index, total: self.total }),
        }
    }
}

// Don't use `#[derive(Clone, PartialEq)]` here as it would require `Hasher` to implement them as well.
impl<H: Hasher> Clone for Proof<H> {
    fn clone(&self) -> Self {
        Self {
            total: self.total,
            index: self.index,
            leaf_hash: self.leaf_hash.clone(),
            aunts: self.aunts.clone(),
        }
    }
}

impl<H: Hasher> PartialEq for Proof<H> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.index == other.index
            && self.leaf_hash == other.leaf_hash
            && self.aunts == other.aunts
    }
}

impl<H: Hasher> fmt::Display for Proof<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proof{{total: {}, index: {}, leaf_hash: {}, aunts: [",
            self.total,
            self.index,
            hex::encode_upper(&self.leaf_hash)
        )?;

        for (i, aunt) in self.aunts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&hex::encode_upper(aunt))?;
        }

        f.write_str("]}")
    }
}
