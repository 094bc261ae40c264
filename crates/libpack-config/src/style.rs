//! Stylesheet processing chain.
//!
//! A [`StyleChain`] is declared in the order the build engine expects and runs
//! in reverse: the last declared stage sees the source first. Swapping adjacent
//! stages breaks relative asset resolution, so the orders below are fixed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::profile::BuildProfile;

/// Public path applied to extracted assets so they resolve from a sibling directory.
pub const EXTRACTED_PUBLIC_PATH: &str = "../";

/// One kind of stylesheet processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleStage {
    /// Inserts the processed CSS into the document at runtime
    Inject,
    /// Writes the processed CSS to a standalone stylesheet
    Extract,
    /// Assembles CSS modules, resolving `@import` and `url()`
    Assemble,
    /// Adds vendor prefixes
    Prefix,
    /// Rewrites relative URLs against the file they came from
    RewriteUrls,
    /// Compiles the preprocessor dialect to plain CSS
    Compile,
}

impl StyleStage {
    /// Transform stage the build engine dispatches to.
    pub fn loader(self) -> &'static str {
        match self {
            StyleStage::Inject => "style-loader",
            StyleStage::Extract => "extract-text-webpack-plugin/loader",
            StyleStage::Assemble => "css-loader",
            StyleStage::Prefix => "postcss-loader",
            StyleStage::RewriteUrls => "resolve-url-loader",
            StyleStage::Compile => "sass-loader",
        }
    }

    pub fn is_extraction(self) -> bool {
        self == StyleStage::Extract
    }

    pub fn is_runtime_injection(self) -> bool {
        self == StyleStage::Inject
    }
}

/// A named stage with its ordered options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleStep {
    pub stage: StyleStage,
    pub loader: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl StyleStep {
    pub fn new(stage: StyleStage) -> Self {
        Self {
            stage,
            loader: stage.loader().to_string(),
            options: IndexMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// Ordered style stages, in declared order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleChain(Vec<StyleStep>);

impl StyleChain {
    pub fn new(steps: Vec<StyleStep>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[StyleStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stage kinds in declared order.
    pub fn stages(&self) -> Vec<StyleStage> {
        self.0.iter().map(|step| step.stage).collect()
    }

    /// Steps in the order the build engine runs them.
    pub fn execution_order(&self) -> impl Iterator<Item = &StyleStep> {
        self.0.iter().rev()
    }

    pub fn count(&self, stage: StyleStage) -> usize {
        self.0.iter().filter(|step| step.stage == stage).count()
    }

    pub fn step(&self, stage: StyleStage) -> Option<&StyleStep> {
        self.0.iter().find(|step| step.stage == stage)
    }
}

/// Build the style chain for a profile.
///
/// Development injects CSS at runtime (hot replaceable). Production minifies,
/// prefixes and extracts into a standalone stylesheet, falling back to
/// injection when extraction is disabled.
pub fn style_chain(profile: BuildProfile) -> StyleChain {
    match profile {
        BuildProfile::Development => StyleChain::new(vec![
            StyleStep::new(StyleStage::Inject),
            StyleStep::new(StyleStage::Assemble),
            StyleStep::new(StyleStage::RewriteUrls),
            StyleStep::new(StyleStage::Compile),
        ]),
        BuildProfile::Production => StyleChain::new(vec![
            StyleStep::new(StyleStage::Extract)
                .with_option("fallback", json!(StyleStage::Inject.loader()))
                .with_option("publicPath", json!(EXTRACTED_PUBLIC_PATH))
                .with_option("allChunks", json!(true)),
            StyleStep::new(StyleStage::Assemble)
                .with_option("minimize", json!(true))
                .with_option("sourceMap", json!(true)),
            StyleStep::new(StyleStage::Prefix).with_option("plugins", json!(["autoprefixer"])),
            StyleStep::new(StyleStage::RewriteUrls),
            StyleStep::new(StyleStage::Compile),
        ]),
    }
}
