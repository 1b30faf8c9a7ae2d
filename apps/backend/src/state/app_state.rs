use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::realtime::broadcast::Broadcaster;
use crate::realtime::hub::MatchHub;
use crate::services::engine::ScoringEngine;
use crate::services::match_locks::MatchLocks;
use crate::services::realtime::{BroadcastDispatcher, RealtimeScoring};

/// Shared resources for the scoring core.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Per-match write/read locks shared by every engine built from this state.
    pub locks: Arc<MatchLocks>,
    pub hub: Arc<MatchHub>,
    /// Shared so every realtime engine publishes through the same per-match queues.
    pub dispatcher: BroadcastDispatcher,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let hub = Arc::new(MatchHub::new());
        let broadcaster: Arc<dyn Broadcaster> = hub.clone();
        Self {
            db,
            locks: Arc::new(MatchLocks::new()),
            hub,
            dispatcher: BroadcastDispatcher::new(broadcaster),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn scoring_engine(&self) -> ScoringEngine {
        ScoringEngine::new(self.db.clone(), Arc::clone(&self.locks))
    }

    /// Engine that also publishes every mutation to the in-process hub.
    pub fn realtime_scoring(&self) -> RealtimeScoring<ScoringEngine> {
        RealtimeScoring::new(self.scoring_engine(), self.dispatcher.clone())
    }
}
