//! libpack CLI - profile-driven build configuration for component libraries.
//!
//! Handles argument parsing, logging initialization, and command dispatch.
//! The deployment environment is read here, once, and passed down.

use clap::Parser;
use libpack_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments (NODE_ENV is read by clap at this point)
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
