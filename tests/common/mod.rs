//! Shared test doubles for routing tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use cache_proxy::{
    CacheRequest, ProxyError, ProxyResult, Reply, RouteHandle, RouteTraverser,
    ShardSplitDirectory, SplitLookup,
};

/// Terminal handle that records every request it receives and echoes the
/// request key back in the reply value, so callers can tell replies apart.
pub struct RecordingRoute {
    requests: Mutex<Vec<CacheRequest>>,
    failing_keys: HashSet<String>,
}

impl RecordingRoute {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            failing_keys: HashSet::new(),
        })
    }

    /// A recording route that fails any request whose full key is listed.
    pub fn failing_on(keys: impl IntoIterator<Item = String>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            failing_keys: keys.into_iter().collect(),
        })
    }

    pub fn requests(&self) -> Vec<CacheRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|req| req.full_key().to_string())
            .collect()
    }
}

#[async_trait]
impl RouteHandle for RecordingRoute {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn route(&self, req: &CacheRequest) -> ProxyResult<Reply> {
        self.requests.lock().unwrap().push(req.clone());
        if self.failing_keys.contains(req.full_key()) {
            return Err(ProxyError::Backend(format!(
                "injected failure for {}",
                req.full_key()
            )));
        }
        Ok(Reply::found(req.full_key().as_bytes().to_vec()))
    }

    fn traverse(&self, _req: &CacheRequest, _t: &RouteTraverser<'_>) {}
}

/// Directory wrapper that counts lookups.
pub struct CountingDirectory {
    inner: Arc<dyn ShardSplitDirectory>,
    lookups: AtomicUsize,
}

impl CountingDirectory {
    pub fn new(inner: Arc<dyn ShardSplitDirectory>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ShardSplitDirectory for CountingDirectory {
    fn lookup(&self, routing_key: &str) -> SplitLookup {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(routing_key)
    }
}

/// Wait until the recording route has seen `expected` requests. Detached
/// secondary deletes land at the scheduler's leisure.
pub async fn wait_for_requests(route: &RecordingRoute, expected: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while route.requests().len() < expected {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    })
    .await
    .unwrap_or_else(|_| {
        panic!(
            "expected {} requests, saw {:?}",
            expected,
            route.keys()
        )
    });
}
