use crate::grid::{exact_sqrt, is_valid_dim};
use crate::tokens::parse_tokens;
use crate::{Error, Node, PixelGrid, Quad, Result};

/// a tree along with the side length of the grid it covers
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Decoded {
    pub dim: usize,
    pub tree: Node,
}
impl Decoded {
    /// the header alone decides how big the grid is, so this can fail with `Error::TooLarge`
    pub fn render(&self) -> Result<PixelGrid> {
        self.tree.try_render(self.dim)
    }
}

impl Node {
    /// reads a token sequence produced by `Node::encode`
    ///
    /// The tree does not have to be reduced, but it has to tile the grid exactly:
    /// it can't nest deeper than single pixels and nothing may follow it.
    pub fn decode(tokens: impl IntoIterator<Item = i64>) -> Result<Decoded> {
        TokenReader::new(tokens.into_iter()).read()
    }
    /// `Node::decode` for whitespace separated text, one token per line is what `format_tokens` writes
    pub fn decode_str(text: &str) -> Result<Decoded> {
        Node::decode(parse_tokens(text)?)
    }
}

struct TokenReader<I> {
    tokens: I,
    /// tokens consumed so far
    at: usize,
    max_depth: u32,
}
impl<I: Iterator<Item = i64>> TokenReader<I> {
    fn new(tokens: I) -> Self {
        Self {
            tokens,
            at: 0,
            max_depth: 0,
        }
    }

    fn read(mut self) -> Result<Decoded> {
        let dim = self.read_header()?;
        self.max_depth = dim.trailing_zeros();
        let tree = self.read_node(self.max_depth)?;
        let remaining = self.tokens.count();
        if remaining > 0 {
            return Err(Error::TrailingTokens { remaining });
        }
        Ok(Decoded { dim, tree })
    }
    fn read_header(&mut self) -> Result<usize> {
        let header = self.consume()?;
        u64::try_from(header)
            .ok()
            .and_then(exact_sqrt)
            .and_then(|dim| usize::try_from(dim).ok())
            .filter(|&dim| is_valid_dim(dim))
            .ok_or(Error::MalformedHeader(header))
    }
    /// `depth_left` is how many more splits fit above single pixels
    fn read_node(&mut self, depth_left: u32) -> Result<Node> {
        let position = self.at;
        match self.consume()? {
            Node::SPLIT if depth_left == 0 => Err(Error::DepthExceeded {
                position,
                max_depth: self.max_depth,
            }),
            Node::SPLIT => Quad::try_from_fn(|_| self.read_node(depth_left - 1)).map(Node::from),
            value => u8::try_from(value)
                .map(Node::Leaf)
                .map_err(|_| Error::OutOfRangeValue { value, position }),
        }
    }
    fn consume(&mut self) -> Result<i64> {
        let token = self
            .tokens
            .next()
            .ok_or(Error::TruncatedStream { consumed: self.at })?;
        self.at += 1;
        Ok(token)
    }
}
