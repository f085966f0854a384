//! Nested list nodes
//!
//! The reader produces plain s-expression structure: an atom is one lowercase token,
//! a list is one matched pair of parentheses. Nothing here knows about PDDL keywords;
//! that is left to the semantic layer consuming the tree.
//!
//! Serialization is untagged, so a tree maps directly onto JSON/YAML strings and
//! arrays: `(a (b c) d)` becomes `["a", ["b", "c"], "d"]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of a parsed PDDL structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Atom(String),
    List(Vec<Node>),
}

impl Node {
    pub fn atom(text: impl Into<String>) -> Self {
        Node::Atom(text.into())
    }

    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Node::List(items.into_iter().collect())
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Atom(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// True for `?`-prefixed atoms
    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Atom(text) if text.starts_with('?'))
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Node::Atom(text) => Some(text),
            Node::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            Node::Atom(_) => None,
        }
    }

    /// Parenthesis nesting depth: 0 for an atom, 1 for a flat list
    pub fn depth(&self) -> usize {
        match self {
            Node::Atom(_) => 0,
            Node::List(items) => list_depth(items),
        }
    }
}

/// Nesting depth of a list given its elements
pub fn list_depth(items: &[Node]) -> usize {
    1 + items.iter().map(Node::depth).max().unwrap_or(0)
}

/// Write a list body as canonical s-expression text
pub fn write_list(f: &mut impl fmt::Write, items: &[Node]) -> fmt::Result {
    f.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{}", item)?;
    }
    f.write_char(')')
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Atom(text) => f.write_str(text),
            Node::List(items) => write_list(f, items),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Atom(text.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}
