use super::{path, split_point, Side};
use crate::hash::Hasher;

/// A hash node in the hash tree.
#[derive(Debug)]
pub(super) enum HashNode<H: Hasher> {
    Branch(H::Hash, Box<(HashNode<H>, HashNode<H>)>),
    Leaf(H::Hash),
}

impl<H: Hasher> HashNode<H> {
    /// Build the whole tree for the given items, following the split rule.
    ///
    /// There is no tree, hence no node, for an empty list of items.
    pub fn build(items: &[impl AsRef<[u8]>]) -> Option<Self> {
        match items {
            [] => None,
            [item] => Some(Self::leaf(item)),
            _ => {
                let (left, right) = items.split_at(split_point(items.len()));
                Some(Self::branch(Self::build(left)?, Self::build(right)?))
            }
        }
    }

    fn branch(left: Self, right: Self) -> Self {
        Self::Branch(H::inner_hash(left.hash(), right.hash()), Box::new((left, right)))
    }

    fn leaf(item: impl AsRef<[u8]>) -> Self {
        Self::Leaf(H::leaf_hash(item))
    }

    pub fn hash(&self) -> &H::Hash {
        match self {
            Self::Leaf(hash) => hash,
            Self::Branch(hash, _) => hash,
        }
    }

    fn nodes(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(_, nodes) => Some((&nodes.0, &nodes.1)),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    fn visit_nodes(&self) -> impl Iterator<Item = &Self> {
        let mut rights = Vec::new();

        std::iter::successors(Some(self), move |&node| {
            if let Some((left, right)) = node.nodes() {
                rights.push(right);
                Some(left)
            } else {
                rights.pop()
            }
        })
    }

    /// All leaves, from left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Self> {
        self.visit_nodes().filter(|&node| node.is_leaf())
    }

    /// Collect the sibling hashes on the path from the leaf at `index` up to this node, closest sibling first.
    ///
    /// `total` must be the number of leaves below this node.
    pub fn aunts(&self, index: usize, total: usize) -> Vec<H::Hash> {
        let path = path(index, total);
        let mut aunts = Vec::with_capacity(path.len());
        let mut node = self;

        for side in path {
            let Some((left, right)) = node.nodes() else {
                break;
            };

            let (next, aunt) = match side {
                Side::Left => (left, right),
                Side::Right => (right, left),
            };

            aunts.push(aunt.hash().clone());
            node = next;
        }

        aunts.reverse();
        aunts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::hash::tests::SimpleHasher;

    fn tree(items: &str) -> Option<HashNode<SimpleHasher>> {
        let items: Vec<_> = items.chars().map(String::from).collect();
        HashNode::build(&items)
    }

    #[test]
    fn build_nodes() {
        assert!(tree("").is_none());

        assert!(tree("a").unwrap().is_leaf());
        assert_eq!(tree("a").unwrap().hash(), "a");

        let node = tree("abcde").unwrap();
        assert_eq!(node.hash(), "(((ab)(cd))e)");

        let (left, right) = node.nodes().unwrap();
        assert_eq!(left.hash(), "((ab)(cd))");
        assert!(right.is_leaf());
    }

    #[test]
    fn visit_nodes() {
        for (items, node_hashes) in [
            ("a", vec!["a"]),
            ("ab", vec!["(ab)", "a", "b"]),
            ("abc", vec!["((ab)c)", "(ab)", "a", "b", "c"]),
        ] {
            let node = tree(items).unwrap();

            assert!(node.visit_nodes().map(HashNode::hash).eq(node_hashes.iter()));
        }
    }

    #[test]
    fn leaves_in_order() {
        const ITEMS: &str = "abcdefghijk";
        let node = tree(ITEMS).unwrap();

        assert!(node.leaves().map(HashNode::hash).eq(ITEMS.chars().map(String::from).collect::<Vec<_>>().iter()));
    }

    #[test]
    fn collect_aunts() {
        let node = tree("abcde").unwrap();

        assert_eq!(node.aunts(0, 5), ["b", "(cd)", "e"]);
        assert_eq!(node.aunts(3, 5), ["c", "(ab)", "e"]);
        assert_eq!(node.aunts(4, 5), ["((ab)(cd))"]);

        assert!(tree("a").unwrap().aunts(0, 1).is_empty());
    }
}
