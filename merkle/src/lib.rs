//! A simple crate computing hash tree root hashes (aka. Merkle root) over ordered items, along with inclusion proofs.
//!
//! The tree shape only depends on the number of items: the left subtree of any branch holds the largest power of two
//! strictly less than its number of items, so that root hashes are reproducible from the items alone. Leaves and
//! inner nodes are hashed with distinct prefixes (`0x00` and `0x01`), preventing a leaf from being passed off as an
//! inner node and vice versa.
//!
//! Any hash algorithm can back a tree through the [`Hasher`] trait, which is implemented for all
//! [RustCrypto](https://github.com/RustCrypto/hashes) hashers with the `digest_compat` feature.
//!
//! # Pros of the current implementation
//! - Everything is a pure function of the items, safe to call from several threads at once.
//! - Proofs don't store the side of each aunt, it is derived from the proven index and the number of items.
//!
//! # Known limitations of the current implementation
//! - The tree is never stored, adding an item requires to hash all items again.
//! - The number of items is not committed by the root hash: a proof claiming another number of items is only rejected
//!   when it changes the path to the proven leaf.

mod error;
mod hash;
mod tree;

pub use error::{Error, Result};
pub use hash::{Hasher, INNER_PREFIX, LEAF_PREFIX};
pub use tree::{
    build_proofs, expected_aunts, hash_items, hash_items_iterative, split_point, Proof, MAX_AUNTS,
};

#[cfg(feature = "digest_compat")]
pub mod compat;
