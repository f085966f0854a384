//! The shared token cursor
//!
//! A [`TokenStream`] is created once per parse and handed down by `&mut` through every
//! level of list recursion. Whatever a nested list consumes is gone for its parent too.
//! There is no peeking and no rewinding.

use crate::pddl::ast::{Position, SourceLocation};
use crate::pddl::lexing::{SpannedToken, Tokenizer};
use std::ops::Range as ByteRange;

pub struct TokenStream<'source> {
    tokens: Tokenizer<'source>,
    last_span: ByteRange<usize>,
}

impl<'source> TokenStream<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            last_span: 0..0,
        }
    }

    /// Pull the next token, advancing the cursor for every holder of this stream
    pub fn next_token(&mut self) -> Option<SpannedToken> {
        let (token, span) = self.tokens.next()?;
        self.last_span = span.clone();
        Some((token, span))
    }

    /// Byte range of the most recently consumed token
    pub fn last_span(&self) -> ByteRange<usize> {
        self.last_span.clone()
    }

    /// Line/column of a byte offset in the underlying source
    ///
    /// Only called on the error path, so the line table is built on demand.
    pub fn position_of(&self, byte_offset: usize) -> Position {
        SourceLocation::new(self.tokens.source()).byte_to_position(byte_offset)
    }
}
