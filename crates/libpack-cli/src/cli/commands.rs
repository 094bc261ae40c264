use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available libpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled build configuration as JSON
    ///
    /// Writes to stdout unless --out is given.
    Config(ConfigArgs),

    /// Validate the configuration against the project tree
    ///
    /// Checks patterns and names, then that the entry source and the HTML
    /// template exist.
    Check(CheckArgs),
}

/// Inputs shared by every command
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Deployment environment; only "production" selects the production profile
    #[arg(long = "env", env = "NODE_ENV", value_name = "ENV")]
    pub env: Option<String>,

    /// Project root containing package.json
    #[arg(short = 'C', long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Override the library name from package.json
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Override the HTML template preprocessor (e.g. pug)
    #[arg(long, value_name = "EXT")]
    pub html_preprocessor: Option<String>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Skip filesystem checks (entry source, HTML template)
    #[arg(long)]
    pub schema_only: bool,
}
