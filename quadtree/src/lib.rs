//! Lossless quadtree compression of square gray images
//!
//! A grid is split into quadrants until every pixel is its own leaf
//! (`Node::build`), uniform quadrants are merged back together (`Node::reduce`)
//! and the result is flattened into a preorder token sequence (`Node::encode`).
//! `Node::decode` and `Node::render` undo that.
//!
//! ```
//! use quadtree::{Node, PixelGrid};
//!
//! let grid = PixelGrid::from_rows(&[[0_u8, 0], [0, 255]]).unwrap();
//! let tree = Node::build(&grid).unwrap().reduce();
//! let tokens = tree.encode(grid.dim());
//! assert_eq!(tokens, [4, -1, 0, 0, 0, 255]);
//!
//! let decoded = Node::decode(tokens).unwrap();
//! assert_eq!(decoded.render().unwrap(), grid);
//! ```

// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod error;
mod grid;
mod node;
mod pipeline;
mod quad;
mod tokens;
mod ops {
    mod build;
    mod count;
    mod decode;
    mod display;
    mod encode;
    mod reduce;
    mod render;
    mod test_format;

    pub use decode::Decoded;
}

pub use crate::node::*;
pub use error::*;
pub use grid::PixelGrid;
pub use ops::*;
pub use pipeline::*;
pub use quad::*;
pub use tokens::*;
