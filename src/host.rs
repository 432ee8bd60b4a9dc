//! Process-wide host identity.
//!
//! # Responsibilities
//! - Derive one stable numeric identifier for the machine this process runs on
//! - Keep it constant across requests and restarts on the same host
//!
//! # Design Decisions
//! - Hashed from the hostname, so every process on a host agrees on the value
//! - Computed once and cached for the lifetime of the process
//! - `DefaultHasher` uses fixed keys, so the value survives restarts within a
//!   deployment generation

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

static HOST_ID: OnceLock<u64> = OnceLock::new();

/// Stable numeric identifier for this host.
///
/// Host-keyed partitioning decisions (such as picking a shard split for all
/// gets issued from this machine) rely on this value being identical for
/// every request the host sends.
pub fn host_id() -> u64 {
    *HOST_ID.get_or_init(|| {
        let mut hasher = DefaultHasher::new();
        hostname().hash(&mut hasher);
        hasher.finish()
    })
}

fn hostname() -> String {
    if let Ok(name) = std::env::var("HOSTNAME") {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    if let Ok(name) = std::fs::read_to_string("/etc/hostname") {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    "localhost".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_id_is_stable_within_process() {
        assert_eq!(host_id(), host_id());
    }

    #[test]
    fn hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }
}
