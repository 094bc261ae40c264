//! File-based descriptor discovery for CLI use
//!
//! Reads the library descriptor from `package.json`, layered under
//! `LIBPACK_`-prefixed environment variables and any caller overrides.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::descriptor::{LibraryDescriptor, optional_scalar_string};
use crate::error::{ConfigError, Result};

pub const PACKAGE_JSON: &str = "package.json";
pub const ENV_PREFIX: &str = "LIBPACK_";

/// File-based descriptor discovery
///
/// Priority: overrides > environment variables > package.json.
///
/// # Example
///
/// ```no_run
/// use libpack_config::DescriptorDiscovery;
///
/// let descriptor = DescriptorDiscovery::new(".").load().unwrap();
/// println!("building {}", descriptor.name);
/// ```
pub struct DescriptorDiscovery {
    root: PathBuf,
}

impl DescriptorDiscovery {
    /// Create a new discovery rooted at a project directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find `package.json` in the root directory
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(PACKAGE_JSON);
        path.is_file().then_some(path)
    }

    /// Provider stack without caller overrides.
    ///
    /// The environment layer is read on its own and merged back with
    /// package.json key casing; figment lowercases env keys.
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::new();

        match self.find() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading library descriptor");
                figment = figment.merge(Json::file(path));
            }
            None => {
                tracing::debug!(root = %self.root.display(), "no package.json found");
            }
        }

        let env: DescriptorOverrides = Figment::from(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(figment.merge(Serialized::defaults(env)))
    }

    /// Load the descriptor from package.json and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingName` if no layer supplies a library name.
    pub fn load(&self) -> Result<LibraryDescriptor> {
        self.extract(self.figment()?)
    }

    /// Load the descriptor with caller overrides merged on top
    pub fn load_with<T: Serialize>(&self, overrides: T) -> Result<LibraryDescriptor> {
        self.extract(self.figment()?.merge(Serialized::defaults(overrides)))
    }

    fn extract(&self, figment: Figment) -> Result<LibraryDescriptor> {
        let descriptor: LibraryDescriptor = figment.extract()?;

        if descriptor.name.trim().is_empty() {
            return Err(ConfigError::MissingName(self.root.clone()));
        }

        Ok(descriptor)
    }
}

/// Descriptor fields a caller may override; unset fields are left alone.
///
/// Deserializes from `LIBPACK_NAME` / `LIBPACK_HTML_PREPROCESSOR` as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorOverrides {
    #[serde(
        default,
        deserialize_with = "optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "htmlPreprocessor",
        alias = "html_preprocessor",
        default,
        deserialize_with = "optional_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub html_preprocessor: Option<String>,
}
