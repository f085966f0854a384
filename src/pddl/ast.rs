//! Parsed structure and source positions

pub mod node;
pub mod range;

pub use node::{list_depth, write_list, Node};
pub use range::{Position, SourceLocation};
