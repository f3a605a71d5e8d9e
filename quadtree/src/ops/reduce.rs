use tracing::trace;

use crate::{Node, Quad};

impl Node {
    /// the smallest tree that renders to the same pixels
    ///
    /// Children are fully reduced before their parent is considered for merging.
    /// A `Split` that only becomes uniform after its own children merge would
    /// otherwise never compare equal to a sibling `Leaf`, and a single pass would
    /// miss it.
    pub fn reduce(&self) -> Self {
        let reduced = self.reduce_impl();
        trace!(
            before = self.node_count(),
            after = reduced.node_count(),
            "reduce"
        );
        reduced
    }
    fn reduce_impl(&self) -> Self {
        match self {
            Node::Leaf(value) => Node::Leaf(*value),
            Node::Split(quad) => {
                let quad: &Quad<Node> = quad;
                quad.as_ref().map(Node::reduce_impl).merge()
            }
        }
    }
}

impl Quad<Node> {
    /// collapses to a single leaf when all quadrants are leaves of one value
    fn merge(self) -> Node {
        match self.uniform_value() {
            Some(value) => Node::Leaf(value),
            None => self.into(),
        }
    }
    fn uniform_value(&self) -> Option<u8> {
        let value = self.nw.leaf()?;
        self.iter()
            .all(|node| node.leaf() == Some(value))
            .then_some(value)
    }
}
