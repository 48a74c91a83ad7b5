use std::path::PathBuf;
use thiserror::Error;

use crate::core::{DefinitionError, MaskError};

/// Errors that can occur while loading mask profiles.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Profile file does not exist.
    #[error("Profile file not found: {0}")]
    NotFound(PathBuf),
    /// A line could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
    /// A `$variable` was used before being defined.
    #[error("Undefined variable '${variable}' on line {line}")]
    UndefinedVariable { variable: String, line: usize },
    /// A `define` line carried a predicate that does not compile.
    #[error("Invalid definition on line {line}: {source}")]
    InvalidDefinition {
        line: usize,
        #[source]
        source: DefinitionError,
    },
    /// Two `mask` lines share a name.
    #[error("Duplicate profile '{name}' on line {line}")]
    DuplicateProfile { name: String, line: usize },
    /// No profile with the requested name.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
    /// The profile's pattern was rejected when building the mask.
    #[error("Invalid mask: {0}")]
    Mask(#[from] MaskError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
