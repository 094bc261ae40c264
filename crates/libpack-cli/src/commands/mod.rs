//! Command implementations for the libpack CLI.
//!
//! - [`config`] - Emit the assembled configuration
//! - [`check`] - Validate the configuration against the project

pub mod check;
pub mod config;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use config::execute as config_execute;
