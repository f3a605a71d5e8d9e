use crate::{Node, PixelGrid};

// macros make formatting nicer

/// this has very little error handling, rows of whitespace separated values
#[macro_export]
macro_rules! test_grid {
    {$s:expr} => {
        $crate::PixelGrid::from_test_format($s)
    };
}
/// this has very little error handling, see `Node`'s `Display` for the format
#[macro_export]
macro_rules! test_tree {
    ($s:expr) => {
        $crate::Node::from_test_format($s)
    };
}

impl PixelGrid {
    /// expects one line per row of whitespace separated values in 0..=255
    /// blank lines and leading/trailing spaces are ignored
    pub fn from_test_format(s: &str) -> PixelGrid {
        let rows: Vec<Vec<u8>> = s
            .lines()
            .map(|line| line.split_ascii_whitespace().map(parse_value).collect())
            .filter(|row: &Vec<u8>| !row.is_empty())
            .collect();
        PixelGrid::from_rows(&rows).expect("square grid")
    }
}
impl Node {
    /// expects values in 0..=255 and parenthesized groups of exactly 4
    pub fn from_test_format(s: &str) -> Node {
        let spaced = s.replace('(', " ( ").replace(')', " ) ");
        let mut words = spaced.split_ascii_whitespace();
        let node = parse_node(&mut words);
        assert_eq!(words.next(), None, "trailing input");
        node
    }
}

fn parse_node<'s>(words: &mut impl Iterator<Item = &'s str>) -> Node {
    match words.next().expect("more input") {
        "(" => {
            let node = Node::new(
                parse_node(words),
                parse_node(words),
                parse_node(words),
                parse_node(words),
            );
            assert_eq!(words.next(), Some(")"), "exactly 4 children");
            node
        }
        word => Node::Leaf(parse_value(word)),
    }
}
fn parse_value(word: &str) -> u8 {
    word.parse()
        .unwrap_or_else(|_| panic!("Invalid value {word:?}"))
}
