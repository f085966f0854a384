//! Format registry for parsed PDDL structures
//!
//! Each output format implements the `Formatter` trait and is registered by name with
//! `FormatRegistry`. The CLI looks formats up by the name given on the command line.

use crate::pddl::ast::Node;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for structure formatters
///
/// `items` are the elements of a top-level list, as returned by the parser.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "sexpr", "json")
    fn name(&self) -> &str;

    fn serialize(&self, items: &[Node]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Serialize a parsed list using the named format
    pub fn serialize(&self, items: &[Node], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(items)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::SexprFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }

    /// Shared registry holding the built-in formatters
    pub fn global() -> &'static FormatRegistry {
        &DEFAULT_REGISTRY
    }
}
