//! Proxy-wide error definitions.

use thiserror::Error;

/// Errors that can surface while routing a request.
///
/// The routing tree never translates child failures; whatever a downstream
/// handle returns is what the caller sees.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The downstream destination reported a failure.
    #[error("backend error: {0}")]
    Backend(String),

    /// The downstream destination did not answer in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The connection to the destination could not be established.
    #[error("destination unreachable: {0}")]
    Unreachable(String),
}

/// Result type for routing operations.
pub type ProxyResult<T> = Result<T, ProxyError>;
