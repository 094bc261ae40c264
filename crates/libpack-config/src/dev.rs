//! Development server configuration types.
//!
//! The descriptor is profile independent. A production build still carries
//! it; the build engine ignores it unless it runs in serve mode.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::layout::ProjectLayout;

pub const DEV_SERVER_PORT: u16 = 8080;
pub const DEV_SERVER_BROWSER: &str = "chrome";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    /// Directory served as the site root
    pub content_base: PathBuf,

    /// Gzip responses
    pub compress: bool,

    pub port: u16,

    /// Browser launched once the server is up
    pub open: String,

    /// Hot module replacement
    pub hot: bool,

    /// Reload when files under `content_base` change
    pub watch_content_base: bool,

    /// Serve the index page for unmatched routes (client-side routing)
    pub history_api_fallback: bool,

    pub watch_options: WatchOptions,

    pub stats: StatsOptions,
}

/// File watching parameters the build engine uses between rebuilds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    /// Debounce window (ms) coalescing rapid change notifications
    pub aggregate_timeout: u64,

    pub ignored: String,

    /// Polling interval (ms)
    pub poll: u64,
}

impl WatchOptions {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.aggregate_timeout)
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            aggregate_timeout: 500,
            ignored: "./node_modules/".to_string(),
            poll: 1000,
        }
    }
}

/// Build statistics printed by the dev server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOptions {
    pub colors: bool,
    pub provided_exports: bool,
    pub depth: bool,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            colors: true,
            provided_exports: true,
            depth: true,
        }
    }
}

impl DevServerConfig {
    /// Serve the output directory of `layout`.
    pub fn for_layout(layout: &ProjectLayout) -> Self {
        Self {
            content_base: layout.output_dir(),
            compress: false,
            port: DEV_SERVER_PORT,
            open: DEV_SERVER_BROWSER.to_string(),
            hot: true,
            watch_content_base: true,
            history_api_fallback: true,
            watch_options: WatchOptions::default(),
            stats: StatsOptions::default(),
        }
    }
}
