use crate::Node;

impl Node {
    /// number of `Split`s on the longest path from here to a leaf
    pub fn depth(&self) -> u32 {
        match self {
            Node::Leaf(_) => 0,
            Node::Split(quad) => 1 + quad.iter().map(Node::depth).max().unwrap_or(0),
        }
    }
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(quad) => 1 + quad.iter().map(Node::node_count).sum::<usize>(),
        }
    }
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(quad) => quad.iter().map(Node::leaf_count).sum(),
        }
    }
}
