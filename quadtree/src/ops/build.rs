//! full resolution tree from a grid

use tracing::trace_span;

use crate::grid::is_valid_dim;
use crate::{Error, Node, PixelGrid, Quad, Result};

impl Node {
    /// builds the maximal tree for `grid`, every pixel gets its own leaf
    ///
    /// The result has depth exactly `log2(grid.dim())`, see `Node::reduce` to shrink it.
    pub fn build(grid: &PixelGrid) -> Result<Self> {
        let dim = grid.dim();
        if !is_valid_dim(dim) {
            return Err(Error::InvalidDimension(dim));
        }
        let _span = trace_span!("build", dim).entered();
        Ok(build_square(grid, 0, 0, dim))
    }
}

fn build_square(grid: &PixelGrid, x: usize, y: usize, side: usize) -> Node {
    let half = side / 2;
    Quad::from_fn(|q| {
        let (dx, dy) = q.offset(half);
        if half == 1 {
            Node::Leaf(grid.get(x + dx, y + dy))
        } else {
            build_square(grid, x + dx, y + dy, half)
        }
    })
    .into()
}
