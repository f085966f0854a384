//! # pddl-reader
//!
//! Reads PDDL domain and problem files into nested lists of lowercase atoms, the raw
//! structure a planner's semantic layer starts from.
//!
//! ```text
//! (define (domain blocks) (:requirements :strips))
//!   => [define, [domain, blocks], [:requirements, :strips]]
//! ```
//!
//! The reader does no semantic checking: types, arities and keywords are all just
//! atoms here.

pub mod pddl;

pub use pddl::ast::Node;
pub use pddl::parsing::{parse_nested_list, ParseError, ParseOptions};
