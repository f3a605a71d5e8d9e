use crate::quad::Quad;

/// A square region of a gray image
///
/// A `Split` exclusively owns its four quadrants, each half its side length.
/// Nothing is shared, so equality is structural.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Node {
    /// uniform region
    Leaf(u8),
    /// region subdivided into NW, NE, SW, SE
    Split(Box<Quad<Node>>),
}

impl Node {
    /// token emitted for a `Split` in the preorder encoding
    pub const SPLIT: i64 = -1;

    pub fn new(
        nw: impl Into<Node>,
        ne: impl Into<Node>,
        sw: impl Into<Node>,
        se: impl Into<Node>,
    ) -> Self {
        Self::new_split(Quad {
            nw: nw.into(),
            ne: ne.into(),
            sw: sw.into(),
            se: se.into(),
        })
    }
    pub fn new_leaf(value: u8) -> Self {
        Self::Leaf(value)
    }
    pub fn new_split(quad: Quad<Node>) -> Self {
        Self::Split(Box::new(quad))
    }

    pub fn leaf(&self) -> Option<u8> {
        match self {
            Self::Leaf(value) => Some(*value),
            Self::Split(_) => None,
        }
    }
    pub fn split(&self) -> Option<&Quad<Node>> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(quad) => Some(&**quad),
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}
impl From<u8> for Node {
    fn from(value: u8) -> Self {
        Self::new_leaf(value)
    }
}
impl From<Quad<Node>> for Node {
    fn from(quad: Quad<Node>) -> Self {
        Self::new_split(quad)
    }
}
