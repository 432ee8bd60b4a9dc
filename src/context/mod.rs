//! Request-scoped provenance context.
//!
//! # Responsibilities
//! - Carry a per-call-chain side channel through routing traversals
//! - Record which shard split directories a traversal consulted
//!
//! # Design Decisions
//! - Installed via a tokio task-local, so handing a context to a traversal is
//!   opt-in; recording outside any scope is a silent no-op
//! - The handle clones cheaply (`Arc` inner) so the caller keeps a reader
//!   while the scoped code records

use std::sync::{Arc, Mutex};

use crate::directory::ShardSplitDirectory;

tokio::task_local! {
    static REQUEST_CONTEXT: RequestContext;
}

/// Side channel for one request's traversal through the routing tree.
#[derive(Clone, Default)]
pub struct RequestContext {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    directories: Mutex<Vec<Arc<dyn ShardSplitDirectory>>>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that `directory` was consulted while handling this request.
    pub fn record_directory(&self, directory: &Arc<dyn ShardSplitDirectory>) {
        if let Ok(mut recorded) = self.inner.directories.lock() {
            recorded.push(Arc::clone(directory));
        }
    }

    /// Directories recorded so far, in consultation order.
    pub fn directories(&self) -> Vec<Arc<dyn ShardSplitDirectory>> {
        self.inner
            .directories
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }

    /// Run `f` with this context installed as the current one.
    pub fn sync_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        REQUEST_CONTEXT.sync_scope(self.clone(), f)
    }

    /// Run `fut` with this context installed as the current one.
    pub async fn scope<F: std::future::Future>(&self, fut: F) -> F::Output {
        REQUEST_CONTEXT.scope(self.clone(), fut).await
    }
}

/// Record `directory` into the current request context, if one is installed.
pub fn record_directory(directory: &Arc<dyn ShardSplitDirectory>) {
    let _ = REQUEST_CONTEXT.try_with(|ctx| ctx.record_directory(directory));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::SplitMapDirectory;
    use std::collections::HashMap;

    fn directory() -> Arc<dyn ShardSplitDirectory> {
        Arc::new(SplitMapDirectory::new(HashMap::new()))
    }

    #[test]
    fn records_inside_scope() {
        let ctx = RequestContext::new();
        let dir = directory();
        ctx.sync_scope(|| record_directory(&dir));

        let recorded = ctx.directories();
        assert_eq!(recorded.len(), 1);
        assert!(Arc::ptr_eq(&recorded[0], &dir));
    }

    #[test]
    fn recording_without_scope_is_a_noop() {
        record_directory(&directory());
    }

    #[tokio::test]
    async fn records_inside_async_scope() {
        let ctx = RequestContext::new();
        let dir = directory();
        let dir2 = Arc::clone(&dir);
        ctx.scope(async move { record_directory(&dir2) }).await;
        assert_eq!(ctx.directories().len(), 1);
    }
}
