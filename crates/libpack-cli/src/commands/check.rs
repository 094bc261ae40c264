//! Check command implementation.
//!
//! Assembles the configuration and runs the validators over it without
//! writing anything.

use libpack_config::{ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the descriptor and assemble the configuration
/// 2. Schema checks (names, filename patterns, module patterns)
/// 3. Filesystem checks (entry source, HTML template) unless `--schema-only`
///
/// # Errors
///
/// Returns `CliError::CheckFailed` with the number of failed checks.
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = utils::assemble(&args.project)?;
    ui::info(&format!(
        "Checking {} configuration for {}",
        config.profile, config.output.library
    ));

    let mut validators: Vec<(&str, Box<dyn ConfigValidator>)> =
        vec![("schema", Box::new(SchemaValidator))];
    if !args.schema_only {
        validators.push(("filesystem", Box::new(FsValidator)));
    }

    let mut failures = 0;
    for (name, validator) in &validators {
        match validator.validate(&config) {
            Ok(()) => ui::success(&format!("{name} checks passed")),
            Err(err) => {
                failures += 1;
                tracing::debug!(validator = name, error = %err, "validation failed");
                ui::error(&format!("{name}: {err}"));
            }
        }
    }

    if failures > 0 {
        return Err(CliError::CheckFailed(failures));
    }

    ui::success("Configuration is valid!");
    Ok(())
}
