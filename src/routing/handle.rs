//! Composable route handles.

use async_trait::async_trait;

use crate::error::ProxyResult;
use crate::protocol::{CacheRequest, Reply};

/// One node in the request-routing tree.
///
/// Handles are immutable once built and shared via `Arc`; the same child may
/// be reachable from several parents. `route` executes a request for real,
/// `traverse` enumerates the child calls `route` would make without
/// performing any of them.
#[async_trait]
pub trait RouteHandle: Send + Sync {
    /// Stable name the tree builder uses to identify this handle type.
    fn name(&self) -> &'static str;

    /// Execute the request and return the downstream reply.
    async fn route(&self, req: &CacheRequest) -> ProxyResult<Reply>;

    /// Visit every child this handle would forward `req` to, without
    /// executing anything. Must never block.
    fn traverse(&self, req: &CacheRequest, t: &RouteTraverser<'_>);
}

/// Visitor driving a dry-run walk of the routing tree.
pub struct RouteTraverser<'a> {
    on_visit: Box<dyn Fn(&dyn RouteHandle, &CacheRequest) + 'a>,
}

impl<'a> RouteTraverser<'a> {
    pub fn new(on_visit: impl Fn(&dyn RouteHandle, &CacheRequest) + 'a) -> Self {
        Self {
            on_visit: Box::new(on_visit),
        }
    }

    /// Report a routing edge, then descend into the visited handle.
    pub fn visit(&self, handle: &dyn RouteHandle, req: &CacheRequest) {
        (self.on_visit)(handle, req);
        handle.traverse(req, self);
    }
}

/// Terminal handle that stores nothing and answers every request with the
/// default reply for its kind.
#[derive(Debug, Default)]
pub struct NullRoute;

impl NullRoute {
    pub const NAME: &'static str = "null";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteHandle for NullRoute {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn route(&self, req: &CacheRequest) -> ProxyResult<Reply> {
        Ok(Reply::default_for(req.kind()))
    }

    fn traverse(&self, _req: &CacheRequest, _t: &RouteTraverser<'_>) {}
}
