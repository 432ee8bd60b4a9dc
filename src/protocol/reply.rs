//! Cache reply model.

use crate::protocol::request::RequestKind;

/// Outcome reported by a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Found,
    NotFound,
    Stored,
    NotStored,
    Deleted,
    Touched,
}

/// Reply to one cache operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: ReplyStatus,
    value: Option<Vec<u8>>,
}

impl Reply {
    pub fn new(status: ReplyStatus) -> Self {
        Self {
            status,
            value: None,
        }
    }

    pub fn found(value: Vec<u8>) -> Self {
        Self {
            status: ReplyStatus::Found,
            value: Some(value),
        }
    }

    pub fn not_found() -> Self {
        Self::new(ReplyStatus::NotFound)
    }

    pub fn stored() -> Self {
        Self::new(ReplyStatus::Stored)
    }

    pub fn not_stored() -> Self {
        Self::new(ReplyStatus::NotStored)
    }

    pub fn deleted() -> Self {
        Self::new(ReplyStatus::Deleted)
    }

    /// The reply a terminal handle with no storage gives for `kind`.
    pub fn default_for(kind: RequestKind) -> Self {
        if kind.is_get_like() || kind.is_delete_like() {
            Self::not_found()
        } else {
            Self::not_stored()
        }
    }

    pub fn status(&self) -> ReplyStatus {
        self.status
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn is_hit(&self) -> bool {
        self.status == ReplyStatus::Found
    }
}
