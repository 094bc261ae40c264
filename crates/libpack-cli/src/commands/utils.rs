//! Shared utilities for command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use libpack_config::discovery::DescriptorOverrides;
use libpack_config::{BuildConfig, BuildProfile, DescriptorDiscovery, ProjectLayout};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result, ResultExt};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| CliError::InvalidArgument(format!("Cannot read current directory: {e}")))
}

/// Resolve the project root to an absolute directory.
pub fn project_root(root: &Path) -> Result<PathBuf> {
    let root = resolve_path(root, &get_cwd()?);
    let root = fs::canonicalize(&root).with_path(&root)?;

    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    Ok(root)
}

/// Resolve the profile, load the descriptor and assemble the configuration.
pub fn assemble(args: &ProjectArgs) -> Result<BuildConfig> {
    let profile = BuildProfile::resolve(args.env.as_deref());
    tracing::debug!(signal = ?args.env, profile = %profile, "resolved build profile");

    let root = project_root(&args.root)?;
    let descriptor = DescriptorDiscovery::new(&root).load_with(DescriptorOverrides {
        name: args.name.clone(),
        html_preprocessor: args.html_preprocessor.clone(),
    })?;
    tracing::debug!(
        library = %descriptor.name,
        template = descriptor.template_extension(),
        "loaded library descriptor"
    );

    Ok(BuildConfig::assemble(
        profile,
        &descriptor,
        &ProjectLayout::new(root),
    ))
}
