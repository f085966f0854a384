//! Lexing for PDDL text
//!
//! Turns raw domain or problem text into a forward-only stream of lowercase tokens.
//! Comments are dropped here; nothing downstream ever sees them.

pub mod tokenizer;
pub mod tokens;

pub use tokenizer::{tokenize, tokenize_with_spans, SpannedToken, Tokenizer};
pub use tokens::Token;
