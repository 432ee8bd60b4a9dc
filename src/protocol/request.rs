//! Cache request model.

/// Marker separating the routing-relevant part of a key from trailing bytes
/// that only the destination interprets.
const HASH_STOP: &str = "|#|";

/// The operation a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Get,
    Gets,
    Metaget,
    Set,
    Add,
    Replace,
    Append,
    Prepend,
    Incr,
    Decr,
    Touch,
    Delete,
}

impl RequestKind {
    /// True for read operations that may be steered to a shard split.
    pub fn is_get_like(self) -> bool {
        matches!(self, RequestKind::Get | RequestKind::Gets | RequestKind::Metaget)
    }

    /// True for invalidations that must reach every shard split.
    pub fn is_delete_like(self) -> bool {
        matches!(self, RequestKind::Delete)
    }
}

/// One cache operation travelling through the routing tree.
///
/// Cloning a request and calling [`set_key`](CacheRequest::set_key) on the
/// copy is how routing nodes derive rewritten requests; the original is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRequest {
    kind: RequestKind,
    key: String,
    value: Option<Vec<u8>>,
}

impl CacheRequest {
    pub fn new(kind: RequestKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: None,
        }
    }

    pub fn with_value(kind: RequestKind, key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: Some(value),
        }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// The complete key as sent to the destination.
    pub fn full_key(&self) -> &str {
        &self.key
    }

    /// The part of the key that routing decisions are made on.
    ///
    /// Everything from a `|#|` marker onward is opaque to routing, so the
    /// routing key is always a prefix of the full key.
    pub fn routing_key(&self) -> &str {
        match self.key.find(HASH_STOP) {
            Some(stop) => &self.key[..stop],
            None => &self.key,
        }
    }

    /// Replace the key. Used on cloned requests when a routing node rewrites
    /// the destination shard.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }
}
