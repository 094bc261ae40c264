//! Output naming and module exposure.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::layout::ProjectLayout;
use crate::profile::BuildProfile;

/// Placeholder the build engine replaces with the entry or chunk name.
pub const NAME_PLACEHOLDER: &str = "[name]";

/// How the bundle exposes the library to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// Universal module: script-tag global, AMD loader, or CommonJS require
    #[default]
    Umd,
}

/// Where and under which names bundles are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPolicy {
    /// Output directory
    pub path: PathBuf,

    /// Entry key the `[name]` placeholder resolves to for the main bundle
    #[serde(skip)]
    pub entry_name: String,

    /// Filename pattern for entry bundles
    pub filename: String,

    /// Filename pattern for split chunks
    pub chunk_filename: String,

    /// Global binding and module export name
    pub library: String,

    pub library_target: ModuleFormat,

    /// Name the AMD module after the library
    pub umd_named_define: bool,
}

impl OutputPolicy {
    /// Entry filename with the placeholder resolved.
    pub fn resolve_filename(&self) -> String {
        self.filename.replace(NAME_PLACEHOLDER, &self.entry_name)
    }

    /// Chunk filename for a given chunk name.
    pub fn resolve_chunk_filename(&self, chunk: &str) -> String {
        self.chunk_filename.replace(NAME_PLACEHOLDER, chunk)
    }
}

/// Compute the output policy for a profile.
///
/// Production entry bundles carry a `.min` suffix. Chunk files never do, in
/// either profile.
pub fn output_policy(
    profile: BuildProfile,
    library_name: &str,
    layout: &ProjectLayout,
) -> OutputPolicy {
    let filename = if profile.is_production() {
        format!("{NAME_PLACEHOLDER}.min.js")
    } else {
        format!("{NAME_PLACEHOLDER}.js")
    };

    OutputPolicy {
        path: layout.output_dir(),
        entry_name: library_name.to_string(),
        filename,
        chunk_filename: format!("{NAME_PLACEHOLDER}.js"),
        library: library_name.to_string(),
        library_target: ModuleFormat::Umd,
        umd_named_define: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/work/widget-kit")
    }

    #[test]
    fn production_entry_is_minified() {
        let policy = output_policy(BuildProfile::Production, "widget-kit", &layout());
        assert_eq!(policy.filename, "[name].min.js");
        assert_eq!(policy.resolve_filename(), "widget-kit.min.js");
    }

    #[test]
    fn development_entry_is_plain() {
        let policy = output_policy(BuildProfile::Development, "widget-kit", &layout());
        assert_eq!(policy.resolve_filename(), "widget-kit.js");
        assert!(!policy.filename.contains("min"));
    }

    #[test]
    fn chunk_names_never_minified() {
        let dev = output_policy(BuildProfile::Development, "widget-kit", &layout());
        let prod = output_policy(BuildProfile::Production, "widget-kit", &layout());
        assert_eq!(dev.chunk_filename, prod.chunk_filename);
        assert_eq!(prod.resolve_chunk_filename("vendors"), "vendors.js");
    }

    #[test]
    fn exposes_library_as_umd() {
        let policy = output_policy(BuildProfile::Production, "widget-kit", &layout());
        assert_eq!(policy.library, "widget-kit");
        assert_eq!(policy.library_target, ModuleFormat::Umd);
        assert!(policy.umd_named_define);
        assert_eq!(policy.path, PathBuf::from("/work/widget-kit/dist"));

        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["libraryTarget"], json!("umd"));
        assert_eq!(value["chunkFilename"], json!("[name].js"));
        assert!(value.get("entryName").is_none());
    }
}
