//! JSON and YAML output
//!
//! Both use the untagged serde shape of [`Node`]: atoms are strings, lists are arrays.

use super::registry::{FormatError, Formatter};
use crate::pddl::ast::Node;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, items: &[Node]) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(items)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Nested JSON arrays of strings"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, items: &[Node]) -> Result<String, FormatError> {
        serde_yaml::to_string(items).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Nested YAML sequences of strings"
    }
}
