//! Treeviz formatter for parsed PDDL structures
//!
//! One line per node, nesting drawn with box connectors. Top-level elements sit at
//! the root; each list shows its element count and expands below.
//!
//! Icons
//!     List: ☰
//!     Atom: ◦
//!
//! Example for `(define (domain blocks))`:
//!
//! ```text
//! ├─ ◦ define
//! └─ ☰ 2 items
//!   ├─ ◦ domain
//!   └─ ◦ blocks
//! ```

use super::registry::{FormatError, Formatter};
use crate::pddl::ast::Node;

const MAX_ATOM_CHARS: usize = 30;

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, items: &[Node]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(items))
    }

    fn description(&self) -> &str {
        "Indented tree, one node per line"
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(items: &[Node]) -> String {
    let mut result = String::new();
    append_children(&mut result, items, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    match node {
        Node::Atom(text) => {
            result.push_str(&format!(
                "{}{} ◦ {}\n",
                prefix,
                connector,
                truncate(text, MAX_ATOM_CHARS)
            ));
        }
        Node::List(children) => {
            let noun = if children.len() == 1 { "item" } else { "items" };
            result.push_str(&format!(
                "{}{} ☰ {} {}\n",
                prefix,
                connector,
                children.len(),
                noun
            ));
            let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            append_children(result, children, &new_prefix);
        }
    }
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}
