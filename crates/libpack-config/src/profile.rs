//! Deployment profile selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The environment value that selects [`BuildProfile::Production`].
pub const PRODUCTION_SIGNAL: &str = "production";

/// Deployment profile for one configuration build.
///
/// Every profile-dependent policy in this crate is a function of this value.
/// It is resolved once, by the caller, and passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    #[default]
    Development,
    Production,
}

impl BuildProfile {
    /// Resolve a profile from an environment signal.
    ///
    /// Only the exact, case-sensitive string `"production"` selects
    /// `Production`. A missing signal, an empty string, or `"Production"`
    /// all resolve to `Development`.
    ///
    /// ```
    /// use libpack_config::BuildProfile;
    ///
    /// assert_eq!(BuildProfile::resolve(Some("production")), BuildProfile::Production);
    /// assert_eq!(BuildProfile::resolve(Some("Production")), BuildProfile::Development);
    /// assert_eq!(BuildProfile::resolve(None), BuildProfile::Development);
    /// ```
    pub fn resolve(signal: Option<&str>) -> Self {
        match signal {
            Some(PRODUCTION_SIGNAL) => BuildProfile::Production,
            _ => BuildProfile::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == BuildProfile::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildProfile::Development => "development",
            BuildProfile::Production => "production",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_production_signal_selects_production() {
        assert_eq!(
            BuildProfile::resolve(Some("production")),
            BuildProfile::Production
        );
        assert!(BuildProfile::resolve(Some("production")).is_production());
    }

    #[test]
    fn everything_else_is_development() {
        for signal in [
            None,
            Some(""),
            Some("Production"),
            Some("PRODUCTION"),
            Some(" production"),
            Some("production "),
            Some("prod"),
            Some("development"),
            Some("test"),
        ] {
            assert_eq!(
                BuildProfile::resolve(signal),
                BuildProfile::Development,
                "signal {signal:?}"
            );
        }
    }

    #[test]
    fn display_matches_signal() {
        assert_eq!(BuildProfile::Production.to_string(), PRODUCTION_SIGNAL);
        assert_eq!(BuildProfile::Development.to_string(), "development");
        assert_eq!(
            serde_json::to_string(&BuildProfile::Production).unwrap(),
            "\"production\""
        );
    }
}
