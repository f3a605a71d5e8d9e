use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};

use quadtree::{join_tokens, Node};
use thiserror::Error;

pub const EXIT_USAGE: u8 = 1;

/// failures the user can do something about, each with its own exit code
#[derive(Error, Debug)]
pub enum Failure {
    #[error("the input file {0:?} does not exist or is not readable")]
    Read(PathBuf, #[source] io::Error),

    #[error("the file {0:?} could not be written to")]
    Write(PathBuf, #[source] io::Error),

    #[error("the input file {0:?} contains invalid data")]
    Contents(PathBuf, #[source] quadtree::Error),
}
impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::Read(..) => 2,
            Failure::Write(..) => 3,
            Failure::Contents(..) => 4,
        }
    }
}

/// exit code for anything `run` returns, unclassified errors count as usage errors
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Failure>()
        .map_or(EXIT_USAGE, Failure::exit_code)
}

pub struct CompressReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    /// everything but the header
    pub preorder: &'a [i64],
    pub raw_size: usize,
    /// every token written, header included
    pub compressed_size: usize,
}
impl CompressReport<'_> {
    #[allow(clippy::cast_precision_loss)] // sizes are far below 2^52
    pub fn compression_percent(&self) -> f64 {
        100.0 - (self.compressed_size as f64 / self.raw_size as f64) * 100.0
    }
}
impl Display for CompressReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Compressing: {}", self.input.display())?;
        writeln!(f, "QTree: {}", join_tokens(self.preorder))?;
        writeln!(f, "Output file: {}", self.output.display())?;
        writeln!(f, "Raw image size: {}", self.raw_size)?;
        writeln!(f, "Compressed image size: {}", self.compressed_size)?;
        writeln!(f, "Compression %: {}", self.compression_percent())
    }
}

pub struct UncompressReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub preorder: &'a [i64],
}
impl Display for UncompressReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // just the file name, the output keeps its full path
        let name = self.input.file_name().unwrap_or(self.input.as_os_str());
        writeln!(f, "Uncompressing: {}", Path::new(name).display())?;
        writeln!(f, "QTree: {}", join_tokens(self.preorder))?;
        writeln!(f, "Output file: {}", self.output.display())
    }
}

pub struct TreeReport<'a> {
    pub dim: usize,
    pub tree: &'a Node,
}
impl Display for TreeReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "QTree: {}", self.tree)?;
        writeln!(f, "Dimension: {0}x{0}", self.dim)?;
        writeln!(f, "Depth: {}", self.tree.depth())?;
        writeln!(f, "Nodes: {}", self.tree.node_count())?;
        writeln!(f, "Leaves: {}", self.tree.leaf_count())
    }
}
