//! Recursive-descent list parser
//!
//! Grammar, over the token stream:
//!
//! ```text
//! input := list EOF
//! list  := "(" item* ")"
//! item  := list | atom
//! ```
//!
//! [`ListParser::parse`] consumes the leading `(` itself and then hands the rest of the
//! work to the list body, which calls itself once per nested `(`. All levels share one
//! [`TokenStream`], so recursion depth always equals parenthesis depth and no token is
//! read twice. The parser states are: awaiting the first token, inside a list body,
//! and exhausted while a list is still open (reported as
//! [`ParseError::UnterminatedList`]).

use crate::pddl::ast::Node;
use crate::pddl::lexing::Token;
use crate::pddl::parsing::error::ParseError;
use crate::pddl::parsing::stream::TokenStream;
use std::ops::Range as ByteRange;

/// Knobs for a single parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest list nesting accepted, counting the top-level list as 1.
    /// `None` leaves recursion unbounded.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

pub struct ListParser {
    options: ParseOptions,
}

impl ListParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse exactly one top-level list and require the stream to end right after it
    pub fn parse(&self, stream: &mut TokenStream) -> Result<Vec<Node>, ParseError> {
        let open = match stream.next_token() {
            Some((Token::OpenParen, span)) => span,
            Some((token, span)) => {
                return Err(ParseError::MissingOpenParen {
                    found: token.into_text(),
                    position: stream.position_of(span.start),
                })
            }
            None => return Err(ParseError::EmptyInput),
        };

        let items = self.list_body(stream, open, 1)?;

        if let Some((token, span)) = stream.next_token() {
            return Err(ParseError::UnexpectedToken {
                found: token.into_text(),
                position: stream.position_of(span.start),
            });
        }

        Ok(items)
    }

    /// Collect the elements of a list whose `(` the caller has just consumed
    pub fn parse_list_body(&self, stream: &mut TokenStream) -> Result<Vec<Node>, ParseError> {
        let open = stream.last_span();
        self.list_body(stream, open, 1)
    }

    fn list_body(
        &self,
        stream: &mut TokenStream,
        open: ByteRange<usize>,
        depth: usize,
    ) -> Result<Vec<Node>, ParseError> {
        if let Some(limit) = self.options.max_depth {
            if depth > limit {
                return Err(ParseError::NestingTooDeep {
                    limit,
                    position: stream.position_of(open.start),
                });
            }
        }

        let mut items = Vec::new();
        loop {
            match stream.next_token() {
                None => {
                    return Err(ParseError::UnterminatedList {
                        open: stream.position_of(open.start),
                    })
                }
                Some((Token::CloseParen, _)) => return Ok(items),
                Some((Token::OpenParen, span)) => {
                    let nested = self.list_body(stream, span, depth + 1)?;
                    items.push(Node::List(nested));
                }
                Some((token, _)) => items.push(Node::Atom(token.into_text())),
            }
        }
    }
}

impl Default for ListParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Parse PDDL text into the elements of its single top-level list
pub fn parse_nested_list(source: &str) -> Result<Vec<Node>, ParseError> {
    parse_nested_list_with(source, &ParseOptions::default())
}

/// Same as [`parse_nested_list`] with explicit options
pub fn parse_nested_list_with(
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<Node>, ParseError> {
    let mut stream = TokenStream::new(source);
    ListParser::new(*options).parse(&mut stream)
}

/// Collect one list body from a stream whose opening `(` was already consumed
///
/// Stops right after the matching `)`; anything after it stays in the stream.
pub fn parse_list_aux(stream: &mut TokenStream) -> Result<Vec<Node>, ParseError> {
    ListParser::default().parse_list_body(stream)
}
