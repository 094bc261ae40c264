//! Auxiliary build plugins.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptor::LibraryDescriptor;
use crate::layout::{OUTPUT_DIR, ProjectLayout};
use crate::output::NAME_PLACEHOLDER;
use crate::profile::BuildProfile;

pub const HTML_FILENAME: &str = "index.html";

/// Module the global-symbol plugin binds.
pub const DOM_UTILITY_MODULE: &str = "jquery";

/// Global identifiers bound to [`DOM_UTILITY_MODULE`].
pub const DOM_UTILITY_GLOBALS: [&str; 3] = ["$", "jQuery", "window.jQuery"];

/// A build plugin and its options, in the shape the build engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginSpec {
    StyleExtraction(StyleExtractionOptions),
    HotReload,
    HtmlGeneration(HtmlGenerationOptions),
    GlobalSymbolProvision(GlobalSymbolOptions),
    OutputCleanup(OutputCleanupOptions),
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::StyleExtraction(_) => "style-extraction",
            PluginSpec::HotReload => "hot-reload",
            PluginSpec::HtmlGeneration(_) => "html-generation",
            PluginSpec::GlobalSymbolProvision(_) => "global-symbol-provision",
            PluginSpec::OutputCleanup(_) => "output-cleanup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleExtractionOptions {
    /// Pass-through when set; styles stay injected at runtime
    pub disable: bool,

    /// Filename pattern for the extracted stylesheet
    pub filename: String,
}

impl StyleExtractionOptions {
    /// Extracted stylesheet name for an entry, or `None` when extraction is off.
    pub fn output_file(&self, entry_name: &str) -> Option<String> {
        (!self.disable).then(|| self.filename.replace(NAME_PLACEHOLDER, entry_name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    pub collapse_whitespace: bool,
    pub collapse_boolean_attributes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlGenerationOptions {
    pub filename: String,
    pub title: String,
    pub minify: HtmlMinifyOptions,

    /// Only re-emit the page when it changes
    pub cache: bool,

    /// Append a content hash to referenced assets for cache busting
    pub hash: bool,

    pub template: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalSymbolOptions {
    /// Global identifier -> module providing it
    pub bindings: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputCleanupOptions {
    /// Directories emptied before a build, relative to `root`
    pub paths: Vec<PathBuf>,
    pub root: PathBuf,
}

/// Compose the plugin list for a profile.
///
/// Always five entries in a fixed order: style extraction, hot reload, HTML
/// generation, global symbols, output cleanup. Hot reload is registered in
/// both profiles; without a dev server it never fires.
pub fn assemble_plugins(
    profile: BuildProfile,
    descriptor: &LibraryDescriptor,
    layout: &ProjectLayout,
) -> Vec<PluginSpec> {
    let plugins = vec![
        PluginSpec::StyleExtraction(style_extraction(profile)),
        PluginSpec::HotReload,
        PluginSpec::HtmlGeneration(html_generation(profile, descriptor, layout)),
        PluginSpec::GlobalSymbolProvision(global_symbols()),
        PluginSpec::OutputCleanup(output_cleanup(layout)),
    ];

    tracing::debug!(
        profile = %profile,
        count = plugins.len(),
        "assembled build plugins"
    );

    plugins
}

pub fn style_extraction(profile: BuildProfile) -> StyleExtractionOptions {
    let filename = if profile.is_production() {
        format!("{NAME_PLACEHOLDER}.min.css")
    } else {
        format!("{NAME_PLACEHOLDER}.css")
    };

    StyleExtractionOptions {
        disable: !profile.is_production(),
        filename,
    }
}

/// Production pages are minified and rely on deterministic filenames;
/// development pages get a content hash instead.
pub fn html_generation(
    profile: BuildProfile,
    descriptor: &LibraryDescriptor,
    layout: &ProjectLayout,
) -> HtmlGenerationOptions {
    let production = profile.is_production();

    HtmlGenerationOptions {
        filename: HTML_FILENAME.to_string(),
        title: descriptor.name.clone(),
        minify: HtmlMinifyOptions {
            collapse_whitespace: production,
            collapse_boolean_attributes: production,
        },
        cache: true,
        hash: !production,
        template: layout.template(descriptor.template_extension()),
    }
}

pub fn global_symbols() -> GlobalSymbolOptions {
    GlobalSymbolOptions {
        bindings: DOM_UTILITY_GLOBALS
            .iter()
            .map(|global| (global.to_string(), DOM_UTILITY_MODULE.to_string()))
            .collect(),
    }
}

pub fn output_cleanup(layout: &ProjectLayout) -> OutputCleanupOptions {
    OutputCleanupOptions {
        paths: vec![PathBuf::from(OUTPUT_DIR)],
        root: layout.root.clone(),
    }
}
