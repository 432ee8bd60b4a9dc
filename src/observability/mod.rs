//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the tracing crate; routing decisions log at
//!   debug, operational events at info
//! - Metrics exposition and distributed tracing belong to the surrounding
//!   deployment, not this crate

pub mod logging;
