//! Pluggable config validation strategies
//!
//! Assembly never validates; these checks are opt-in for callers that want
//! problems reported before the build engine runs.

use std::path::Path;

use regex::Regex;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::output::NAME_PLACEHOLDER;
use crate::plugins::PluginSpec;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate an assembled configuration
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use libpack_config::{
///     BuildConfig, BuildProfile, ConfigValidator, LibraryDescriptor, ProjectLayout,
///     SchemaValidator,
/// };
///
/// let config = BuildConfig::assemble(
///     BuildProfile::Production,
///     &LibraryDescriptor::new("widget-kit"),
///     &ProjectLayout::default(),
/// );
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.output.library.trim().is_empty() {
            return Err(ConfigError::SchemaValidation(
                "library name cannot be empty".to_string(),
            ));
        }

        for (field, pattern) in [
            ("output.filename", &config.output.filename),
            ("output.chunkFilename", &config.output.chunk_filename),
        ] {
            if !pattern.contains(NAME_PLACEHOLDER) {
                return Err(ConfigError::SchemaValidation(format!(
                    "{field} '{pattern}' does not contain {NAME_PLACEHOLDER}"
                )));
            }
        }

        for (name, group) in &config.optimization.split_chunks.cache_groups {
            Regex::new(&group.test).map_err(|source| ConfigError::InvalidPattern {
                pattern: format!("{name}: {}", group.test),
                source,
            })?;
        }

        for rule in &config.module.rules {
            Regex::new(&rule.test).map_err(|source| ConfigError::InvalidPattern {
                pattern: rule.test.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

/// Filesystem validation (for CLI use)
///
/// Checks that the entry sources and the HTML template exist. Without it a
/// missing template only surfaces when the build engine resolves it.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        for entry in config.entry.values() {
            if !entry.exists() {
                return Err(ConfigError::EntryNotFound(entry.clone()));
            }
        }

        for plugin in &config.plugins {
            if let PluginSpec::HtmlGeneration(html) = plugin {
                ensure_file(&html.template)?;
            }
        }

        Ok(())
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::TemplateNotFound(path.to_path_buf()))
    }
}
