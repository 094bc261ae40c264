//! Chunk splitting policy.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Cache group name for third-party code.
pub const VENDOR_GROUP: &str = "vendors";

/// Path pattern matching any module under a dependency directory.
pub const VENDOR_PATTERN: &str = r"[\\/]node_modules[\\/]";

/// Which chunks a splitting rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    /// Chunks loaded with an entry point
    Initial,
    /// Chunks loaded on demand
    Async,
    #[default]
    All,
}

/// A cache group: modules matching `test` are pulled into their own chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkGroup {
    /// Regular expression tested against the module path
    pub test: String,

    /// Higher priority groups win when a module matches several
    pub priority: i32,

    /// Split even when size thresholds would not
    pub enforce: bool,

    pub chunks: ChunkScope,
}

impl ChunkGroup {
    /// Whether a module at `path` belongs to this group.
    pub fn matches(&self, path: &str) -> Result<bool> {
        let pattern = Regex::new(&self.test).map_err(|source| ConfigError::InvalidPattern {
            pattern: self.test.clone(),
            source,
        })?;
        Ok(pattern.is_match(path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    pub chunks: ChunkScope,
    pub cache_groups: IndexMap<String, ChunkGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub split_chunks: SplitChunks,
}

/// The vendor splitting rule. Keeps third-party code in its own cacheable
/// chunk, separate from library code. Profile independent.
pub fn split_chunks() -> SplitChunks {
    let mut cache_groups = IndexMap::new();
    cache_groups.insert(
        VENDOR_GROUP.to_string(),
        ChunkGroup {
            test: VENDOR_PATTERN.to_string(),
            priority: 10,
            enforce: true,
            chunks: ChunkScope::Initial,
        },
    );

    SplitChunks {
        chunks: ChunkScope::All,
        cache_groups,
    }
}
