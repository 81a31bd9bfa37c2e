//! Delimiter-scanning tokenizer
//!
//! Splits text on any of `{`, `,`, `:`, `}`. Runs of delimiters count as a
//! single boundary, so empty tokens are never produced. There is no notion of
//! quoting or nesting: a delimiter inside a quoted value splits the value.

use std::iter::FusedIterator;

/// Token delimiter characters
pub const DELIMITERS: [char; 4] = ['{', ',', ':', '}'];

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Single-pass iterator over the tokens of a text record
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `input`
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = match self.rest.find(|c: char| !is_delimiter(c)) {
            Some(start) => start,
            None => {
                self.rest = "";
                return None;
            }
        };

        let rest = &self.rest[start..];
        let end = rest.find(is_delimiter).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;

        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenize `input`
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens::new(input)
}
