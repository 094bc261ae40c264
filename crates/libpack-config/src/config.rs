//! Final configuration assembly.
//!
//! Each sub-policy is built independently from the profile; this module only
//! merges the records into the object handed to the build engine.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chunks::{Optimization, split_chunks};
use crate::descriptor::LibraryDescriptor;
use crate::dev::DevServerConfig;
use crate::error::Result as ConfigResult;
use crate::layout::ProjectLayout;
use crate::output::{OutputPolicy, output_policy};
use crate::plugins::{PluginSpec, assemble_plugins};
use crate::profile::BuildProfile;
use crate::rules::{ModuleRules, module_rules};
use crate::style::StyleChain;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Profile the configuration was assembled for
    #[serde(skip)]
    pub profile: BuildProfile,

    /// Keep built modules in memory between rebuilds
    pub cache: bool,

    /// Library name -> entry source
    pub entry: IndexMap<String, PathBuf>,

    pub output: OutputPolicy,

    pub module: ModuleRules,

    pub optimization: Optimization,

    pub dev_server: DevServerConfig,

    pub plugins: Vec<PluginSpec>,
}

impl BuildConfig {
    /// Assemble the full configuration for one build.
    ///
    /// # Example
    ///
    /// ```
    /// use libpack_config::{BuildConfig, BuildProfile, LibraryDescriptor, ProjectLayout};
    ///
    /// let config = BuildConfig::assemble(
    ///     BuildProfile::Development,
    ///     &LibraryDescriptor::new("widget-kit"),
    ///     &ProjectLayout::new("/work/widget-kit"),
    /// );
    ///
    /// assert_eq!(config.output.resolve_filename(), "widget-kit.js");
    /// assert_eq!(config.style_chain().map(|chain| chain.len()), Some(4));
    /// ```
    pub fn assemble(
        profile: BuildProfile,
        descriptor: &LibraryDescriptor,
        layout: &ProjectLayout,
    ) -> Self {
        let mut entry = IndexMap::new();
        entry.insert(descriptor.name.clone(), layout.entry_source());

        let config = Self {
            profile,
            cache: true,
            entry,
            output: output_policy(profile, &descriptor.name, layout),
            module: module_rules(profile, layout),
            optimization: Optimization {
                split_chunks: split_chunks(),
            },
            dev_server: DevServerConfig::for_layout(layout),
            plugins: assemble_plugins(profile, descriptor, layout),
        };

        tracing::debug!(
            profile = %profile,
            library = %descriptor.name,
            root = %layout.root.display(),
            "assembled build configuration"
        );

        config
    }

    pub fn style_chain(&self) -> Option<&StyleChain> {
        self.module.style_chain()
    }

    /// Path of the HTML template the generation plugin reads.
    pub fn html_template(&self) -> Option<&PathBuf> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginSpec::HtmlGeneration(html) => Some(&html.template),
            _ => None,
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assemble(profile: BuildProfile) -> BuildConfig {
        BuildConfig::assemble(
            profile,
            &LibraryDescriptor::new("widget-kit"),
            &ProjectLayout::new("/work/widget-kit"),
        )
    }

    #[test]
    fn entry_maps_library_to_plugin_source() {
        let config = assemble(BuildProfile::Production);
        assert_eq!(config.entry.len(), 1);
        assert_eq!(
            config.entry["widget-kit"],
            PathBuf::from("/work/widget-kit/src/plugin.js")
        );
        assert!(config.cache);
    }

    #[test]
    fn top_level_keys() {
        let value = assemble(BuildProfile::Development).to_value().unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        for key in [
            "cache",
            "entry",
            "output",
            "module",
            "optimization",
            "devServer",
            "plugins",
        ] {
            assert!(keys.contains(&key.to_string()), "missing {key}");
        }
        assert!(value.get("profile").is_none());
        assert_eq!(
            value["optimization"]["splitChunks"]["cacheGroups"]["vendors"]["priority"],
            json!(10)
        );
    }

    #[test]
    fn profile_only_changes_profile_dependent_parts() {
        let dev = assemble(BuildProfile::Development);
        let prod = assemble(BuildProfile::Production);
        assert_eq!(dev.optimization, prod.optimization);
        assert_eq!(dev.dev_server, prod.dev_server);
        assert_eq!(dev.entry, prod.entry);
        assert_ne!(dev.output, prod.output);
        assert_ne!(dev.plugins, prod.plugins);
    }

    #[test]
    fn assembly_is_repeatable() {
        assert_eq!(
            assemble(BuildProfile::Production),
            assemble(BuildProfile::Production)
        );
    }

    #[test]
    fn value_keeps_declared_key_order() {
        let config = assemble(BuildProfile::Production);
        let value = config.to_value().unwrap();

        let extract: Vec<_> = value["module"]["rules"][2]["use"][0]["options"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(extract, ["fallback", "publicPath", "allChunks"]);

        let globals: Vec<_> = value["plugins"][3]["options"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(globals, ["$", "jQuery", "window.jQuery"]);

        assert_eq!(
            serde_json::to_string_pretty(&value).unwrap(),
            config.to_json_pretty().unwrap()
        );
    }
}
