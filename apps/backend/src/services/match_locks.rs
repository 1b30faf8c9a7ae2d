//! Per-match async read/write locks.
//!
//! Writers for one match run one at a time; readers share the lock. Matches
//! never contend with each other. An entry lives only while some guard holds
//! it or some caller waits on it, so finished matches leave nothing behind.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

type LockMap = DashMap<i64, Arc<RwLock<()>>>;

#[derive(Debug, Default)]
pub struct MatchLocks {
    locks: Arc<LockMap>,
}

/// Holds a match lock; dropping it releases the lock and prunes the entry
/// once nobody else references it.
#[derive(Debug)]
pub struct MatchGuard<G> {
    guard: Option<G>,
    match_id: i64,
    locks: Arc<LockMap>,
}

pub type MatchWriteGuard = MatchGuard<OwnedRwLockWriteGuard<()>>;
pub type MatchReadGuard = MatchGuard<OwnedRwLockReadGuard<()>>;

impl<G> Drop for MatchGuard<G> {
    fn drop(&mut self) {
        // Release first so our own Arc no longer counts.
        self.guard.take();
        // The map holds one reference; anything above that is a holder or a waiter.
        self.locks
            .remove_if(&self.match_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl MatchLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, match_id: i64) -> Arc<RwLock<()>> {
        // Clone out of the map so no shard guard is held across an await.
        self.locks.entry(match_id).or_default().value().clone()
    }

    fn guard<G>(&self, match_id: i64, guard: G) -> MatchGuard<G> {
        MatchGuard {
            guard: Some(guard),
            match_id,
            locks: Arc::clone(&self.locks),
        }
    }

    pub async fn write(&self, match_id: i64) -> MatchWriteGuard {
        let guard = self.lock_for(match_id).write_owned().await;
        self.guard(match_id, guard)
    }

    pub async fn read(&self, match_id: i64) -> MatchReadGuard {
        let guard = self.lock_for(match_id).read_owned().await;
        self.guard(match_id, guard)
    }

    /// Number of matches currently locked or waited on.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
