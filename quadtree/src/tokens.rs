//! text form of token sequences, shared by the raw and compressed formats

use itertools::Itertools;

use crate::{Error, Result};

/// splits on any ascii whitespace, so one token per line and space separated both work
pub fn parse_tokens(text: &str) -> Result<Vec<i64>> {
    text.split_ascii_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse().map_err(|_| Error::NonIntegerToken {
                token: token.to_owned(),
                position,
            })
        })
        .collect()
}

/// one token per line, newline terminated
pub fn format_tokens(tokens: &[i64]) -> String {
    tokens.iter().map(|token| format!("{token}\n")).collect()
}

/// space separated on a single line, for showing to people
pub fn join_tokens(tokens: &[i64]) -> String {
    tokens.iter().join(" ")
}
