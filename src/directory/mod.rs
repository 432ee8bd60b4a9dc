//! Shard split directory subsystem.
//!
//! # Data Flow
//! ```text
//! routing key "prefix:shard:suffix"
//!     → lookup() (locate shard segment, read current split count)
//!     → SplitLookup { count, shard region }
//!     → routing node rewrites keys based on the region
//!
//! On reload:
//!     new split map
//!     → atomic swap of the snapshot (arc-swap)
//!     → in-flight lookups observe old or new map, never a torn one
//! ```
//!
//! # Design Decisions
//! - The shard region is returned by position (a byte range into the routing
//!   key), never re-located by content, since the same bytes may repeat
//!   elsewhere in the key
//! - Split counts are read fresh per request; callers must not cache them
//! - The directory is shared read-only state; handles are reference-counted

use std::ops::Range;

pub mod split_map;

pub use split_map::SplitMapDirectory;

/// Result of a directory lookup for one routing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLookup {
    /// Number of live splits for the shard; always at least 1.
    pub count: usize,
    /// Byte range of the shard segment within the routing key.
    pub shard: Range<usize>,
}

impl SplitLookup {
    /// Lookup result for a key whose shard is not currently split.
    pub fn unsplit() -> Self {
        Self {
            count: 1,
            shard: 0..0,
        }
    }
}

/// Read-only view of the current shard split layout.
///
/// Implementations must be safe under arbitrary concurrent reads and must
/// guarantee `count >= 1` for every key.
pub trait ShardSplitDirectory: Send + Sync {
    fn lookup(&self, routing_key: &str) -> SplitLookup;
}
