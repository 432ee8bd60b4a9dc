//! Map-backed shard split directory.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::ShardSplitConfig;
use crate::directory::{ShardSplitDirectory, SplitLookup};

/// Directory backed by a swappable map from shard segment to split count.
///
/// The map is held behind an `ArcSwap` so an operator-driven reload replaces
/// the whole snapshot atomically; concurrent lookups keep reading the
/// snapshot they loaded. No lock is held across a lookup.
pub struct SplitMapDirectory {
    splits: ArcSwap<HashMap<String, usize>>,
}

impl SplitMapDirectory {
    pub fn new(splits: HashMap<String, usize>) -> Self {
        Self {
            splits: ArcSwap::from_pointee(splits),
        }
    }

    pub fn from_config(config: &ShardSplitConfig) -> Self {
        Self::new(config.splits.clone())
    }

    /// Replace the split layout. In-flight lookups finish against the
    /// snapshot they already loaded.
    pub fn reload(&self, splits: HashMap<String, usize>) {
        tracing::info!(shards = splits.len(), "shard split map reloaded");
        self.splits.store(Arc::new(splits));
    }
}

impl ShardSplitDirectory for SplitMapDirectory {
    fn lookup(&self, routing_key: &str) -> SplitLookup {
        let Some(shard) = shard_segment(routing_key) else {
            return SplitLookup::unsplit();
        };
        let count = self
            .splits
            .load()
            .get(&routing_key[shard.clone()])
            .copied()
            .unwrap_or(1)
            // The directory contract promises count >= 1.
            .max(1);
        SplitLookup { count, shard }
    }
}

/// Locate the shard segment of a routing key: the bytes between the first
/// `:` and the following `:` (or the end of the key).
fn shard_segment(routing_key: &str) -> Option<Range<usize>> {
    let start = routing_key.find(':')? + 1;
    let end = match routing_key[start..].find(':') {
        Some(off) => start + off,
        None => routing_key.len(),
    };
    if start == end {
        return None;
    }
    Some(start..end)
}
