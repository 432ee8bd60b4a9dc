//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs validation (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → SplitMapDirectory::from_config (split layout snapshot)
//!
//! On reload:
//!     operator loads a new ProxyConfig
//!     → SplitMapDirectory::reload swaps the snapshot atomically
//!     → in-flight lookups observe old or new layout, never a torn one
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, validate_config, ConfigError, ValidationError};
pub use schema::{ObservabilityConfig, ProxyConfig, ShardSplitConfig};
