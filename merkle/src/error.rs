/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Reasons for an inclusion proof to be rejected.
///
/// Building a tree never fails, only proof checks do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The proven index does not fit in the tree, which is always the case for an empty tree.
    #[error("proof index {index} is out of range for a tree of {total} items")]
    IndexOutOfRange { index: usize, total: usize },

    /// The number of aunts doesn't match the depth of the proven leaf.
    #[error("invalid proof length: expected {expected} aunts, got {got}")]
    InvalidProofLength { expected: usize, got: usize },

    #[error("invalid leaf hash: wanted {expected} got {got}")]
    LeafMismatch { expected: String, got: String },

    #[error("invalid root hash: wanted {expected} got {got}")]
    RootMismatch { expected: String, got: String },

    #[error("expected no more than {max} aunts, got {got}")]
    TooManyAunts { max: usize, got: usize },

    #[error("expected {expected}-byte hash, got {got} bytes")]
    InvalidDigestSize { expected: usize, got: usize },
}

impl Error {
    pub(crate) fn leaf_mismatch(expected: impl AsRef<[u8]>, got: impl AsRef<[u8]>) -> Self {
        Self::LeafMismatch { expected: hex::encode_upper(expected), got: hex::encode_upper(got) }
    }

    pub(crate) fn root_mismatch(expected: impl AsRef<[u8]>, got: impl AsRef<[u8]>) -> Self {
        Self::RootMismatch { expected: hex::encode_upper(expected), got: hex::encode_upper(got) }
    }
}
