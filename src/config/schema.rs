//! Configuration schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level proxy configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProxyConfig {
    /// Shard split layout fed to the split directory.
    #[serde(default)]
    pub shard_splits: ShardSplitConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Per-shard split counts.
///
/// Keys are shard-id segments as they appear in routing keys; values are the
/// number of live splits for that shard. Shards not listed have one split.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShardSplitConfig {
    #[serde(default)]
    pub splits: HashMap<String, usize>,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "cache_proxy=info".to_string()
}
