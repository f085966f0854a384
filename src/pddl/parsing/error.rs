//! Parse errors
//!
//! Every structural failure aborts the whole parse. Messages are meant for people;
//! positions are available separately through [`ParseError::position`].

use crate::pddl::ast::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not start with `(`
    #[error("expected '(', got {found}")]
    MissingOpenParen { found: String, position: Position },

    /// The input holds no tokens at all
    #[error("expected '(', got end of input")]
    EmptyInput,

    /// The token stream ran out while a list was still open
    #[error("unterminated list: no matching ')' for '('")]
    UnterminatedList { open: Position },

    /// Tokens remain after the top-level list closed
    #[error("unexpected token: {found}")]
    UnexpectedToken { found: String, position: Position },

    /// A list opened deeper than the configured limit
    #[error("nesting depth exceeds limit of {limit}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    /// Where the offending token sits in the source, if there is one
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::MissingOpenParen { position, .. }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::NestingTooDeep { position, .. } => Some(*position),
            ParseError::UnterminatedList { open } => Some(*open),
            ParseError::EmptyInput => None,
        }
    }
}
