use thiserror::Error;

/// Everything that can go wrong turning pixels into tokens or tokens into pixels.
///
/// Positions are 0 based token indices, counting the header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid side length {0} is not a power of two >= 2")]
    InvalidDimension(usize),

    #[error("header {0} is not the pixel count of a square grid with power of two side >= 2")]
    MalformedHeader(i64),

    #[error("value {value} at token {position} is outside 0..=255")]
    OutOfRangeValue { value: i64, position: usize },

    #[error("stream ended after {consumed} tokens in the middle of a tree")]
    TruncatedStream { consumed: usize },

    #[error("token {token:?} at position {position} is not an integer")]
    NonIntegerToken { token: String, position: usize },

    #[error("split at token {position} is nested deeper than {max_depth} levels")]
    DepthExceeded { position: usize, max_depth: u32 },

    #[error("{remaining} tokens left over after the tree ended")]
    TrailingTokens { remaining: usize },

    #[error("expected {expected} pixels for the grid, got {actual}")]
    PixelCount { expected: usize, actual: usize },

    #[error("a {dim}x{dim} grid does not fit in memory")]
    TooLarge { dim: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
