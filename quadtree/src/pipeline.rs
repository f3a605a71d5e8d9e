//! the whole trip in one call, for front ends that don't care about the tree

use tracing::debug;

use crate::{Node, PixelGrid, Result};

/// build, reduce and encode `grid`
pub fn compress(grid: &PixelGrid) -> Result<Vec<i64>> {
    let tree = Node::build(grid)?.reduce();
    let tokens = tree.encode(grid.dim());
    debug!(
        dim = grid.dim(),
        leaves = tree.leaf_count(),
        tokens = tokens.len(),
        "compressed"
    );
    Ok(tokens)
}

/// decode and render `tokens`
pub fn uncompress(tokens: impl IntoIterator<Item = i64>) -> Result<PixelGrid> {
    let decoded = Node::decode(tokens)?;
    debug!(dim = decoded.dim, depth = decoded.tree.depth(), "uncompressed");
    decoded.render()
}
