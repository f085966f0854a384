//! Lazy tokenizer over PDDL source text
//!
//! [`Tokenizer`] wraps the logos lexer and yields each token together with its byte
//! range in the source. It is forward-only and cannot be restarted; callers that need
//! the tokens twice should use [`tokenize`] or [`tokenize_with_spans`].

use crate::pddl::lexing::tokens::Token;
use logos::Logos;
use std::ops::Range as ByteRange;

/// A token paired with the byte range it was read from
pub type SpannedToken = (Token, ByteRange<usize>);

/// Forward-only iterator of lowercase tokens
pub struct Tokenizer<'source> {
    lexer: logos::Lexer<'source, Token>,
}

impl<'source> Tokenizer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Token::lexer(source),
        }
    }

    /// The full source text being tokenized
    pub fn source(&self) -> &'source str {
        self.lexer.source()
    }
}

impl<'source> Iterator for Tokenizer<'source> {
    type Item = SpannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let span = self.lexer.span();
        // Every non-whitespace character is covered by a rule; errors do not occur.
        let token = result.unwrap_or_else(|()| Token::Symbol(self.lexer.slice().to_lowercase()));
        Some((token, span))
    }
}

/// Convenience function to tokenize a string and collect the token texts
pub fn tokenize(source: &str) -> Vec<String> {
    Tokenizer::new(source)
        .map(|(token, _)| token.into_text())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<SpannedToken> {
    Tokenizer::new(source).collect()
}
