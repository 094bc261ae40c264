//! Module-processing rules: which transform stages handle which files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::layout::ProjectLayout;
use crate::profile::BuildProfile;
use crate::style::{StyleChain, style_chain};

pub const SCRIPT_TEST: &str = r"\.js?$";
pub const TEMPLATE_TEST: &str = r"\.pug$";
pub const STYLE_TEST: &str = r"\.scss$";

pub const SCRIPT_LOADER: &str = "babel-loader";
pub const TEMPLATE_LOADER: &str = "pug-loader";

/// What a rule hands matching modules to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleUse {
    /// A single transform stage, invoked as a black box
    Loader { loader: String },
    /// An ordered stylesheet chain
    Chain(StyleChain),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Regular expression tested against the module path
    pub test: String,

    /// Directories whose modules the rule skips
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PathBuf>,

    #[serde(rename = "use")]
    pub uses: RuleUse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRules {
    pub rules: Vec<ModuleRule>,
}

/// Script, template and style rules, in that order.
pub fn module_rules(profile: BuildProfile, layout: &ProjectLayout) -> ModuleRules {
    ModuleRules {
        rules: vec![
            ModuleRule {
                test: SCRIPT_TEST.to_string(),
                exclude: vec![layout.dependency_dir(), layout.legacy_dependency_dir()],
                uses: RuleUse::Loader {
                    loader: SCRIPT_LOADER.to_string(),
                },
            },
            ModuleRule {
                test: TEMPLATE_TEST.to_string(),
                exclude: vec![layout.dependency_dir()],
                uses: RuleUse::Loader {
                    loader: TEMPLATE_LOADER.to_string(),
                },
            },
            ModuleRule {
                test: STYLE_TEST.to_string(),
                exclude: vec![layout.dependency_dir()],
                uses: RuleUse::Chain(style_chain(profile)),
            },
        ],
    }
}

impl ModuleRules {
    /// The stylesheet chain carried by the style rule.
    pub fn style_chain(&self) -> Option<&StyleChain> {
        self.rules.iter().find_map(|rule| match &rule.uses {
            RuleUse::Chain(chain) => Some(chain),
            RuleUse::Loader { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rules_cover_scripts_templates_and_styles() {
        let layout = ProjectLayout::new("/work/kit");
        let rules = module_rules(BuildProfile::Development, &layout).rules;
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].test, SCRIPT_TEST);
        assert_eq!(
            rules[0].exclude,
            vec![
                PathBuf::from("/work/kit/node_modules"),
                PathBuf::from("/work/kit/bower_components"),
            ]
        );
        assert_eq!(rules[1].test, TEMPLATE_TEST);
        assert_eq!(rules[2].test, STYLE_TEST);
    }

    #[test]
    fn style_rule_follows_profile() {
        let layout = ProjectLayout::new("/work/kit");
        let dev = module_rules(BuildProfile::Development, &layout);
        let prod = module_rules(BuildProfile::Production, &layout);
        assert_eq!(dev.style_chain().unwrap().len(), 4);
        assert_eq!(prod.style_chain().unwrap().len(), 5);
    }

    #[test]
    fn loader_rules_serialize_inline() {
        let layout = ProjectLayout::new("/work/kit");
        let value = serde_json::to_value(module_rules(BuildProfile::Production, &layout)).unwrap();
        assert_eq!(value["rules"][0]["use"], json!({ "loader": "babel-loader" }));
        assert_eq!(value["rules"][2]["use"][0]["stage"], json!("extract"));
    }
}
