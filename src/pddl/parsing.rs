//! Parsing of token streams into nested lists
//!
//! The entry point is [`parse_nested_list`]. It reads exactly one top-level list, fully
//! closed, with nothing after it, and returns that list's elements. Anything else is
//! a [`ParseError`]; there are no partial results.

pub mod error;
pub mod parser;
pub mod stream;

pub use error::ParseError;
pub use parser::{
    parse_list_aux, parse_nested_list, parse_nested_list_with, ListParser, ParseOptions,
};
pub use stream::TokenStream;
