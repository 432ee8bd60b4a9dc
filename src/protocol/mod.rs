//! Cache protocol model.
//!
//! # Data Flow
//! ```text
//! Client operation (get/set/delete/...)
//!     → request.rs (CacheRequest: kind + key + optional value)
//!     → routing tree (may clone and rewrite the key)
//!     → destination
//!     → reply.rs (Reply: status + optional value)
//! ```
//!
//! # Design Decisions
//! - Request kind is a closed enum; routing only cares about the
//!   get-like / delete-like / other partition
//! - Requests are cheap to clone so routing nodes can derive rewritten copies
//! - The routing key is a view into the full key (hash-stop aware), never a
//!   separate allocation

pub mod reply;
pub mod request;

pub use reply::{Reply, ReplyStatus};
pub use request::{CacheRequest, RequestKind};
