use crate::Node;

impl Node {
    /// the persisted token sequence: `dim * dim`, then `preorder_tokens`
    ///
    /// # Panics
    /// if `dim * dim` does not fit in an `i64`. No grid that size can be built.
    pub fn encode(&self, dim: usize) -> Vec<i64> {
        let pixel_count = dim
            .checked_mul(dim)
            .and_then(|count| i64::try_from(count).ok())
            .unwrap_or_else(|| panic!("pixel count of a {dim}x{dim} grid does not fit in a token"));
        let mut tokens = Vec::with_capacity(self.node_count() + 1);
        tokens.push(pixel_count);
        self.write_preorder(&mut tokens);
        tokens
    }
    /// `Split` is `Node::SPLIT` followed by NW, NE, SW, SE, a `Leaf` is its value
    pub fn preorder_tokens(&self) -> Vec<i64> {
        let mut tokens = Vec::with_capacity(self.node_count());
        self.write_preorder(&mut tokens);
        tokens
    }
    fn write_preorder(&self, tokens: &mut Vec<i64>) {
        match self {
            Node::Leaf(value) => tokens.push(i64::from(*value)),
            Node::Split(quad) => {
                tokens.push(Node::SPLIT);
                for node in quad.iter() {
                    node.write_preorder(tokens);
                }
            }
        }
    }
}
