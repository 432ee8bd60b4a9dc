//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming CacheRequest
//!     → handle.rs (RouteHandle: route / traverse)
//!     → shard_split.rs (classify, consult directory, rewrite key)
//!     → key_codec.rs (split suffix + key rewriting)
//!     → child handle → ... → destination
//!
//! Dependency introspection:
//!     traverse() walks the same decisions without executing anything,
//!     reporting every child edge to a RouteTraverser
//! ```
//!
//! # Design Decisions
//! - Handles are immutable after construction and shared via Arc; no locks
//!   anywhere on the request path
//! - Trees compose arbitrarily deep; every node exposes the same two
//!   operations
//! - traverse must reproduce route's decisions bit-for-bit, or the reported
//!   dependency edges cannot be trusted

pub mod handle;
pub mod key_codec;
pub mod shard_split;

pub use handle::{NullRoute, RouteHandle, RouteTraverser};
pub use key_codec::{build_split_key, split_suffix};
pub use shard_split::ShardSplitRoute;
