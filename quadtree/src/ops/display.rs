//! the parenthesized summary printed for people, `test_tree!` reads it back

use std::fmt::Display;

use itertools::Itertools;

use crate::Node;

impl Display for Node {
    /// a leaf is its value, a split is `(nw ne sw se)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Leaf(value) => write!(f, "{value}"),
            Node::Split(quad) => write!(f, "({})", quad.iter().format(" ")),
        }
    }
}
