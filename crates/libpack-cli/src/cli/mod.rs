//! Command-line interface definition for libpack.
//!
//! # Command Structure
//!
//! - `libpack config` - Print or write the assembled build configuration
//! - `libpack check` - Assemble and validate without writing anything

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, ProjectArgs};

/// libpack - build configuration for UI component libraries
#[derive(Parser, Debug)]
#[command(
    name = "libpack",
    version,
    about = "Generate build configuration for UI component libraries",
    long_about = "libpack resolves a development or production profile from NODE_ENV and\n\
                  emits the matching bundler configuration: stylesheet chain, output naming,\n\
                  vendor chunk splitting, plugins and dev-server settings."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
