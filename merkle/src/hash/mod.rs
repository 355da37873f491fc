use std::fmt::Debug;

mod context;
pub(crate) use context::HashContext;

/// Prefix written before an item when hashing a leaf.
pub const LEAF_PREFIX: &[u8] = &[0x00];

/// Prefix written before both child hashes when hashing an inner node.
pub const INNER_PREFIX: &[u8] = &[0x01];

/// A hasher trait to produce hash values.
///
/// Any hash algorithm producing fixed-size digests can back a hash tree, the tree logic only relies on this trait.
/// The domain-separated primitives below are provided on top of `write` and `finish`, so that leaves and inner nodes can
/// never be mistaken for one another.
///
/// Implementors must not override [`Hasher::leaf_hash`] nor [`Hasher::inner_hash`]: trees and proofs are only
/// sound as long as leaves are prefixed with [`LEAF_PREFIX`] and inner nodes with [`INNER_PREFIX`].
pub trait Hasher: Default {
    type Hash: AsRef<[u8]> + Clone + PartialEq + Debug;

    fn write(&mut self, bytes: &[u8]);
    fn finish(self) -> Self::Hash;

    /// Produce the hash value and get back to the initial state, so that the hasher can be used again.
    fn finish_reset(&mut self) -> Self::Hash {
        std::mem::take(self).finish()
    }

    /// The size of every hash value, when the algorithm has a fixed one.
    fn output_size() -> Option<usize> {
        None
    }

    /// Hash of the empty byte string, ie. the root hash of a tree without any item.
    fn empty_hash() -> Self::Hash {
        Self::default().finish()
    }

    /// Returns `hash(0x00 || leaf)`.
    ///
    /// Not meant to be overridden.
    fn leaf_hash(leaf: impl AsRef<[u8]>) -> Self::Hash {
        let mut hasher = Self::default();
        hasher.write(LEAF_PREFIX);
        hasher.write(leaf.as_ref());
        hasher.finish()
    }

    /// Returns `hash(0x01 || left || right)`.
    ///
    /// Order matters: swapping both children changes the resulting hash. Not meant to be overridden.
    fn inner_hash(left: impl AsRef<[u8]>, right: impl AsRef<[u8]>) -> Self::Hash {
        let mut hasher = Self::default();
        hasher.write(INNER_PREFIX);
        hasher.write(left.as_ref());
        hasher.write(right.as_ref());
        hasher.finish()
    }
}
