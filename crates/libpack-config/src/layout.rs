//! Project directory conventions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const OUTPUT_DIR: &str = "dist";
pub const SOURCE_DIR: &str = "src";
pub const DEPENDENCY_DIR: &str = "node_modules";
pub const LEGACY_DEPENDENCY_DIR: &str = "bower_components";
pub const ENTRY_FILE: &str = "plugin.js";
pub const TEMPLATE_STEM: &str = "index";

/// Where a library project keeps its sources, dependencies and output.
///
/// All paths handed to the build engine are resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    pub root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn dependency_dir(&self) -> PathBuf {
        self.root.join(DEPENDENCY_DIR)
    }

    pub fn legacy_dependency_dir(&self) -> PathBuf {
        self.root.join(LEGACY_DEPENDENCY_DIR)
    }

    /// Source file the library entry is built from (`src/plugin.js`).
    pub fn entry_source(&self) -> PathBuf {
        self.source_dir().join(ENTRY_FILE)
    }

    /// HTML template for the given extension (`src/index.<ext>`).
    pub fn template(&self, extension: &str) -> PathBuf {
        self.source_dir()
            .join(format!("{TEMPLATE_STEM}.{extension}"))
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_against_root() {
        let layout = ProjectLayout::new("/work/kit");
        assert_eq!(layout.output_dir(), PathBuf::from("/work/kit/dist"));
        assert_eq!(
            layout.entry_source(),
            PathBuf::from("/work/kit/src/plugin.js")
        );
        assert_eq!(
            layout.dependency_dir(),
            PathBuf::from("/work/kit/node_modules")
        );
        assert_eq!(
            layout.template("pug"),
            PathBuf::from("/work/kit/src/index.pug")
        );
    }
}
