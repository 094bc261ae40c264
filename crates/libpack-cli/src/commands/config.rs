//! Config command implementation.
//!
//! Assembles the configuration for the resolved profile and prints it as
//! JSON, or writes it to a file.

use std::fs;

use crate::cli::ConfigArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the config command.
///
/// # Errors
///
/// Returns errors when the descriptor cannot be loaded or the output file
/// cannot be written.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = utils::assemble(&args.project)?;

    let json = if args.compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };

    match args.out {
        Some(out) => {
            let out = utils::resolve_path(&out, &utils::get_cwd()?);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(&out, format!("{json}\n")).with_path(&out)?;

            tracing::info!(path = %out.display(), profile = %config.profile, "wrote configuration");
            ui::success(&format!(
                "Wrote {} configuration to {}",
                config.profile,
                out.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
