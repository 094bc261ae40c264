//! Error types for descriptor loading, validation and serialization.
//!
//! Assembling a [`BuildConfig`](crate::BuildConfig) never fails. Errors only
//! come from reading the library descriptor, from opt-in validation, and from
//! serializing the finished configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Descriptor loading errors
    #[error("library name is missing (looked in {})", .0.display())]
    MissingName(PathBuf),

    #[error("invalid library descriptor: {0}")]
    InvalidDescriptor(String),

    // Schema validation errors (no filesystem checks)
    #[error("invalid module pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    // Filesystem validation errors (for CLI use)
    #[error("entry source not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("HTML template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::InvalidDescriptor(err.to_string())
    }
}
