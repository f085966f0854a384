//! Configuration loading
//!
//! `defaults/pddl-reader.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. User files are layered on top via [`Loader`], then
//! explicit overrides (CLI flags), before deserializing into [`ReaderConfig`].

use crate::pddl::parsing::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/pddl-reader.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// 0 means unbounded
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn parse_options(&self) -> ParseOptions {
        match self.max_depth {
            0 => ParseOptions::unbounded(),
            limit => ParseOptions::with_max_depth(limit),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ReaderConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.parser.max_depth, 512);
        assert_eq!(config.parser.parse_options(), ParseOptions::with_max_depth(512));
        assert_eq!(config.output.format, "sexpr");
    }

    #[test]
    fn zero_depth_means_unbounded() {
        let config = Loader::new()
            .set_override("parser.max_depth", 0i64)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.parser.parse_options(), ParseOptions::unbounded());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.max_depth", 64i64)
            .unwrap()
            .set_override("output.format", "json")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.parser.parse_options(), ParseOptions::with_max_depth(64));
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"treeviz\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.output.format, "treeviz");
        assert_eq!(config.parser.max_depth, 512);
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
    }
}
