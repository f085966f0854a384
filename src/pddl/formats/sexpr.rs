//! Canonical s-expression output
//!
//! Atoms are space-joined and every list is parenthesized, on a single line. Reading
//! the output back yields the same structure.

use super::registry::{FormatError, Formatter};
use crate::pddl::ast::{write_list, Node};

pub struct SexprFormatter;

impl Formatter for SexprFormatter {
    fn name(&self) -> &str {
        "sexpr"
    }

    fn serialize(&self, items: &[Node]) -> Result<String, FormatError> {
        let mut out = to_sexpr_string(items);
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Canonical single-line s-expression"
    }
}

/// Render a top-level list as s-expression text, without a trailing newline
pub fn to_sexpr_string(items: &[Node]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_list(&mut out, items);
    out
}
