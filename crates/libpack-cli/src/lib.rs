//! libpack CLI - build configuration for UI component libraries.
//!
//! Resolves the deployment profile from the environment, reads the library
//! descriptor from `package.json`, and emits the assembled configuration for
//! the external build engine.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `config` and `check` implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
