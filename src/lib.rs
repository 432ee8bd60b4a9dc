//! Distributed key-value cache proxy routing library.
//!
//! # Architecture Overview
//!
//! ```text
//!  CacheRequest                ┌────────────────────────────────────────┐
//!  ────────────────────────────┼─▶ routing tree (RouteHandle nodes)     │
//!                              │      │                                 │
//!                              │      ▼                                 │
//!                              │  ShardSplitRoute ──▶ directory lookup  │
//!                              │      │   (get: pick split per host,    │
//!                              │      │    delete: broadcast,           │
//!                              │      │    write: primary only)         │
//!                              │      ▼                                 │
//!  Reply                       │  child handle ──▶ ... ──▶ destination  │
//!  ◀───────────────────────────┼──────┘                                 │
//!                              └────────────────────────────────────────┘
//!
//!  Cross-cutting: config (TOML + validation), context (per-request
//!  provenance), observability (tracing), host identity.
//! ```
//!
//! Transport, serialization, and destination selection live outside this
//! crate; a tree of [`RouteHandle`]s is handed requests that already carry
//! their keys, and replies flow back untranslated.

// Core subsystems
pub mod directory;
pub mod protocol;
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod observability;

pub use config::ProxyConfig;
pub use context::RequestContext;
pub use directory::{ShardSplitDirectory, SplitLookup, SplitMapDirectory};
pub use error::{ProxyError, ProxyResult};
pub use protocol::{CacheRequest, Reply, ReplyStatus, RequestKind};
pub use routing::{NullRoute, RouteHandle, RouteTraverser, ShardSplitRoute};
