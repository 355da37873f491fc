use crate::hash::{HashContext, Hasher};

mod node;
mod proof;

pub use proof::{build_proofs, expected_aunts, Proof, MAX_AUNTS};

/// Size of the left subtree when splitting `length` items, ie. the largest power of two strictly less than `length`.
///
/// The left subtree is thus always full and never smaller than the right one, so the shape of a tree only depends on
/// its number of items.
#[inline]
pub fn split_point(length: usize) -> usize {
    match length {
        0 | 1 => 0,
        _ => 1 << (length - 1).ilog2(),
    }
}

/// Which child of a branch a path goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Sides taken from the root down to the leaf at `index` in a tree of `total` items.
fn path(mut index: usize, mut total: usize) -> Vec<Side> {
    let mut path = Vec::with_capacity((usize::BITS - total.leading_zeros()) as usize);

    while total > 1 {
        let split = split_point(total);

        if index < split {
            path.push(Side::Left);
            total = split;
        } else {
            path.push(Side::Right);
            index -= split;
            total -= split;
        }
    }

    path
}

/// Compute the root hash of the given items, recursively splitting them into left and right subtrees.
pub fn hash_items<H: Hasher>(items: &[impl AsRef<[u8]>]) -> H::Hash {
    match items {
        [] => H::empty_hash(),
        [item] => H::leaf_hash(item),
        _ => {
            let (left, right) = items.split_at(split_point(items.len()));
            H::inner_hash(hash_items::<H>(left), hash_items::<H>(right))
        }
    }
}

/// Compute the same root hash as [`hash_items`], bottom-up and without recursion.
///
/// All leaf hashes are computed first, then adjacent nodes are paired from left to right, level after level. An odd
/// node at the end of a level is carried over to the next one as is, which gives the exact same shape as the split
/// rule.
pub fn hash_items_iterative<H: Hasher>(items: &[impl AsRef<[u8]>]) -> H::Hash {
    let mut context = HashContext::<H>::default();
    let mut hashes: Vec<_> = items.iter().map(|item| context.leaf_hash(item)).collect();

    tracing::trace!(leaves = hashes.len(), "hashing items bottom-up");

    while hashes.len() > 1 {
        let size = hashes.len();
        let mut write = 0;

        for read in (0..size).step_by(2) {
            hashes[write] = match hashes.get(read + 1) {
                Some(right) => context.inner_hash(&hashes[read], right),
                None => hashes[read].clone(),
            };
            write += 1;
        }

        hashes.truncate(write);
    }

    hashes.pop().unwrap_or_else(H::empty_hash)
}
