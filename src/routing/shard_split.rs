//! Shard-split routing node.
//!
//! # Responsibilities
//! - Make a live shard split invisible to clients
//! - Steer gets to one split per requesting host
//! - Keep writes on the primary split
//! - Broadcast deletes to every split so no stale copy survives
//!
//! # Design Decisions
//! - The node holds exactly one child; distinct splits are reached by the
//!   child's own downstream routing keying off the rewritten shard id
//! - Split counts come from the directory on every request, never cached
//!   here, so an operator reload takes effect immediately
//! - Writes skip the directory entirely: during a migration the primary is
//!   the one representation every writer must agree on
//! - Secondary deletes are fire-and-forget; the caller only pays for the
//!   primary

use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context;
use crate::directory::{ShardSplitDirectory, SplitLookup};
use crate::error::ProxyResult;
use crate::host;
use crate::protocol::{CacheRequest, Reply};
use crate::routing::handle::{RouteHandle, RouteTraverser};
use crate::routing::key_codec::build_split_key;

/// Routing node that fans a logical shard out over its live splits.
pub struct ShardSplitRoute {
    child: Arc<dyn RouteHandle>,
    directory: Arc<dyn ShardSplitDirectory>,
}

impl ShardSplitRoute {
    /// Name the tree builder instantiates this node under.
    pub const NAME: &'static str = "shard-split";

    pub fn new(child: Arc<dyn RouteHandle>, directory: Arc<dyn ShardSplitDirectory>) -> Self {
        Self { child, directory }
    }

    /// Split this host's gets land on, out of `count` live splits.
    ///
    /// Shared by `route` and `traverse` so the dry-run walk reports exactly
    /// the edge the live path takes.
    fn chosen_split(count: usize) -> usize {
        split_for_host(host::host_id(), count)
    }

    /// Clone `req` with its key rewritten to address the split at `offset`.
    fn split_request(&self, req: &CacheRequest, offset: usize, shard: Range<usize>) -> CacheRequest {
        let mut derived = req.clone();
        derived.set_key(build_split_key(req.full_key(), offset, shard));
        derived
    }
}

fn split_for_host(host: u64, count: usize) -> usize {
    (host % count as u64) as usize
}

#[async_trait]
impl RouteHandle for ShardSplitRoute {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn route(&self, req: &CacheRequest) -> ProxyResult<Reply> {
        if req.kind().is_get_like() {
            // Gets are partitioned over the client population: every get this
            // host issues for the shard lands on the same split.
            let SplitLookup { count, shard } = self.directory.lookup(req.routing_key());
            let chosen = Self::chosen_split(count);
            if chosen == 0 {
                return self.child.route(req).await;
            }
            return self
                .child
                .route(&self.split_request(req, chosen - 1, shard))
                .await;
        }

        if !req.kind().is_delete_like() {
            // Anything that is not a get or a delete addresses the primary
            // split, without consulting the directory.
            return self.child.route(req).await;
        }

        // Deletes are broadcast to all splits. Only the primary delete is
        // awaited; each secondary runs as a detached task whose outcome the
        // caller never observes. Invalidations are idempotent, so a dropped
        // parent context does not cancel them.
        let SplitLookup { count, shard } = self.directory.lookup(req.routing_key());
        for offset in 0..count.saturating_sub(1) {
            let child = Arc::clone(&self.child);
            let derived = self.split_request(req, offset, shard.clone());
            tracing::debug!(key = derived.full_key(), "dispatching secondary delete");
            let _detached = tokio::spawn(async move {
                let _ = child.route(&derived).await;
            });
        }
        self.child.route(req).await
    }

    fn traverse(&self, req: &CacheRequest, t: &RouteTraverser<'_>) {
        context::record_directory(&self.directory);

        if !req.kind().is_get_like() && !req.kind().is_delete_like() {
            t.visit(self.child.as_ref(), req);
            return;
        }

        let SplitLookup { count, shard } = self.directory.lookup(req.routing_key());
        if count == 1 {
            t.visit(self.child.as_ref(), req);
            return;
        }

        if req.kind().is_get_like() {
            let chosen = Self::chosen_split(count);
            if chosen == 0 {
                t.visit(self.child.as_ref(), req);
            } else {
                t.visit(
                    self.child.as_ref(),
                    &self.split_request(req, chosen - 1, shard),
                );
            }
            return;
        }

        t.visit(self.child.as_ref(), req);
        for offset in 0..count - 1 {
            t.visit(
                self.child.as_ref(),
                &self.split_request(req, offset, shard.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_selection_is_plain_modulus() {
        assert_eq!(split_for_host(0, 3), 0);
        assert_eq!(split_for_host(7, 3), 1);
        assert_eq!(split_for_host(8, 3), 2);
        assert_eq!(split_for_host(9, 3), 0);
        // A single split always selects the primary.
        for host in [0u64, 1, 42, u64::MAX] {
            assert_eq!(split_for_host(host, 1), 0);
        }
    }

    #[test]
    fn chosen_split_is_stable_for_this_host() {
        assert_eq!(
            ShardSplitRoute::chosen_split(4),
            ShardSplitRoute::chosen_split(4)
        );
        assert!(ShardSplitRoute::chosen_split(4) < 4);
    }
}
