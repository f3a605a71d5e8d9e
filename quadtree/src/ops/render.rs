use tracing::trace_span;

use crate::grid::is_valid_dim;
use crate::{Node, PixelGrid, Quadrant, Result};

impl Node {
    /// expands the tree into a `dim` x `dim` grid
    ///
    /// # Panics
    /// if `dim` is not a power of two >= 2, or the tree splits below single pixels.
    /// `Node::decode` and `Node::build` never produce such a tree for their `dim`.
    /// Also panics if the grid can't be allocated, see `Node::try_render`.
    pub fn render(&self, dim: usize) -> PixelGrid {
        match self.try_render(dim) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }
    /// `render`, but running out of memory for the grid is `Error::TooLarge`
    ///
    /// # Panics
    /// on the same caller bugs as `render`
    pub fn try_render(&self, dim: usize) -> Result<PixelGrid> {
        assert!(is_valid_dim(dim), "can't render to a {dim}x{dim} grid");
        assert!(
            self.depth() <= dim.trailing_zeros(),
            "tree of depth {} is too deep for a {dim}x{dim} grid",
            self.depth()
        );
        let _span = trace_span!("render", dim).entered();
        let mut grid = PixelGrid::try_filled(dim, 0)?;
        self.render_into(&mut grid, 0, 0, dim);
        Ok(grid)
    }
    fn render_into(&self, grid: &mut PixelGrid, x: usize, y: usize, side: usize) {
        match self {
            Node::Leaf(value) => grid.fill_square(x, y, side, *value),
            Node::Split(quad) => {
                let half = side / 2;
                for q in Quadrant::iter_all() {
                    let (dx, dy) = q.offset(half);
                    quad[q].render_into(grid, x + dx, y + dy, half);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{test_grid, test_tree, Error, Node, PixelGrid};

    #[test]
    fn leaf_fills_everything() {
        assert_eq!(Node::Leaf(77).render(8), PixelGrid::filled(8, 77));
    }

    #[test]
    fn offsets() {
        let tree = test_tree!("(0 (1 2 3 4) 5 255)");
        let expected = test_grid! {"
            0 0   1   2
            0 0   3   4
            5 5 255 255
            5 5 255 255
        "};
        assert_eq!(tree.render(4), expected);
    }

    #[test]
    fn scales_with_dim() {
        let tree = Node::new(1, 2, 3, 4);
        let expected = test_grid! {"
            1 1 2 2
            1 1 2 2
            3 3 4 4
            3 3 4 4
        "};
        assert_eq!(tree.render(4), expected);
    }

    #[test]
    fn mixed_depths() {
        let tree = test_tree!("((9 (1 2 3 4) 9 9) 0 0 (0 0 0 (5 6 7 8)))");
        let expected = test_grid! {"
            9 9 1 2 0 0 0 0
            9 9 3 4 0 0 0 0
            9 9 9 9 0 0 0 0
            9 9 9 9 0 0 0 0
            0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0
            0 0 0 0 0 0 5 6
            0 0 0 0 0 0 7 8
        "};
        assert_eq!(tree.render(8), expected);
    }

    #[test]
    fn huge_grid_is_an_error() {
        assert_eq!(
            Node::Leaf(0).try_render(1 << 31),
            Err(Error::TooLarge { dim: 1 << 31 })
        );
        assert_eq!(Node::new(1, 2, 3, 4).try_render(2), Ok(test_grid!("1 2\n3 4")));
    }

    #[test]
    #[should_panic(expected = "too deep")]
    fn too_deep() {
        let _ = test_tree!("((1 2 3 4) 0 0 0)").render(2);
    }

    #[test]
    #[should_panic(expected = "can't render")]
    fn bad_dim() {
        let _ = Node::Leaf(0).render(6);
    }
}
