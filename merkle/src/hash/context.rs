use super::{Hasher, INNER_PREFIX, LEAF_PREFIX};

/// A single hasher state reused across many hash computations.
///
/// It saves allocating a fresh hasher for each node and must be owned by a single computation: the state is reset
/// after each produced hash value, never shared.
#[derive(Debug, Default)]
pub(crate) struct HashContext<H: Hasher> {
    hasher: H,
}

impl<H: Hasher> HashContext<H> {
    /// Same as [`Hasher::leaf_hash`], reusing the inner hasher state.
    #[inline]
    pub fn leaf_hash(&mut self, leaf: impl AsRef<[u8]>) -> H::Hash {
        self.hasher.write(LEAF_PREFIX);
        self.hasher.write(leaf.as_ref());
        self.hasher.finish_reset()
    }

    /// Same as [`Hasher::inner_hash`], reusing the inner hasher state.
    #[inline]
    pub fn inner_hash(&mut self, left: impl AsRef<[u8]>, right: impl AsRef<[u8]>) -> H::Hash {
        self.hasher.write(INNER_PREFIX);
        self.hasher.write(left.as_ref());
        self.hasher.write(right.as_ref());
        self.hasher.finish_reset()
    }
}
