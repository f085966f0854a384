//! Reading PDDL files from disk
//!
//! A planning task comes as two files, a domain and a problem. Both go through the
//! same reader; errors say which of the two was at fault and where it lives.

use crate::pddl::ast::Node;
use crate::pddl::parsing::{parse_nested_list_with, ParseError, ParseOptions};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which half of a planning task a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PddlKind {
    Domain,
    Problem,
}

impl fmt::Display for PddlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PddlKind::Domain => f.write_str("domain"),
            PddlKind::Problem => f.write_str("problem"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {kind} file {}: {source}", path.display())]
    Io {
        kind: PddlKind,
        path: PathBuf,
        source: io::Error,
    },

    #[error("could not parse {kind} file {}: {source}", path.display())]
    Parse {
        kind: PddlKind,
        path: PathBuf,
        source: ParseError,
    },
}

impl LoadError {
    pub fn kind(&self) -> PddlKind {
        match self {
            LoadError::Io { kind, .. } | LoadError::Parse { kind, .. } => *kind,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Io { .. } => None,
        }
    }
}

/// A parsed domain or problem file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PddlFile {
    pub kind: PddlKind,
    pub path: PathBuf,
    /// Elements of the file's top-level list
    pub items: Vec<Node>,
}

/// Parse already-read text, attributing errors to `path`
pub fn parse_source(
    kind: PddlKind,
    path: impl Into<PathBuf>,
    source: &str,
    options: &ParseOptions,
) -> Result<PddlFile, LoadError> {
    let path = path.into();
    match parse_nested_list_with(source, options) {
        Ok(items) => {
            info!(
                "parsed {} file {} ({} top-level items)",
                kind,
                path.display(),
                items.len()
            );
            Ok(PddlFile { kind, path, items })
        }
        Err(source) => Err(LoadError::Parse { kind, path, source }),
    }
}

/// Read and parse one file
pub fn load_file(
    kind: PddlKind,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<PddlFile, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {} file {}", source.len(), kind, path.display());
    parse_source(kind, path, &source, options)
}

/// Read and parse a domain file and a problem file, domain first
pub fn load_pair(
    domain: impl AsRef<Path>,
    problem: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<(PddlFile, PddlFile), LoadError> {
    let domain = load_file(PddlKind::Domain, domain, options)?;
    let problem = load_file(PddlKind::Problem, problem, options)?;
    Ok((domain, problem))
}
