//! The live-scoring entry points: per-match locking, one transaction per
//! mutation, and tracing spans around every operation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{info_span, Instrument};

use crate::db::txn::with_txn;
use crate::domain::ball_event::{check_innings_number, validate_ball_event, BallEvent};
use crate::domain::scorecard::{OverCard, Scorecard};
use crate::error::AppError;
use crate::services::match_locks::MatchLocks;
use crate::services::scoring::{
    load_scorecard, BallOutcome, ScoringService, StartOutcome, UndoOutcome,
};

/// Scoring operations callers drive. Decorators wrap any implementation.
#[async_trait]
pub trait LiveScoring: Send + Sync {
    async fn start_scoring(&self, match_id: i64) -> Result<StartOutcome, AppError>;

    async fn add_ball(&self, event: BallEvent) -> Result<BallOutcome, AppError>;

    async fn undo_ball(&self, match_id: i64, innings_number: u8)
        -> Result<UndoOutcome, AppError>;

    async fn scorecard(&self, match_id: i64) -> Result<Scorecard, AppError>;

    /// The in-progress over of the current innings; `None` between overs.
    async fn current_over(&self, match_id: i64) -> Result<Option<OverCard>, AppError>;
}

/// Base implementation backed by the database.
#[derive(Clone)]
pub struct ScoringEngine {
    db: DatabaseConnection,
    locks: Arc<MatchLocks>,
    service: ScoringService,
}

impl ScoringEngine {
    pub fn new(db: DatabaseConnection, locks: Arc<MatchLocks>) -> Self {
        Self {
            db,
            locks,
            service: ScoringService,
        }
    }
}

#[async_trait]
impl LiveScoring for ScoringEngine {
    async fn start_scoring(&self, match_id: i64) -> Result<StartOutcome, AppError> {
        let span = info_span!("start_scoring", match_id);
        async {
            let _guard = self.locks.write(match_id).await;
            let service = self.service;
            with_txn(&self.db, move |txn| {
                Box::pin(async move { service.start_scoring(txn, match_id).await })
            })
            .await
        }
        .instrument(span)
        .await
    }

    async fn add_ball(&self, event: BallEvent) -> Result<BallOutcome, AppError> {
        let match_id = event.match_id;
        let span = info_span!("add_ball", match_id, innings_number = event.innings_number);
        async {
            // Malformed events never touch the lock or the database.
            let ball = validate_ball_event(&event)?;

            let _guard = self.locks.write(match_id).await;
            let service = self.service;
            with_txn(&self.db, move |txn| {
                Box::pin(async move { service.add_ball(txn, match_id, ball).await })
            })
            .await
        }
        .instrument(span)
        .await
    }

    async fn undo_ball(
        &self,
        match_id: i64,
        innings_number: u8,
    ) -> Result<UndoOutcome, AppError> {
        let span = info_span!("undo_ball", match_id, innings_number);
        async {
            check_innings_number(innings_number)?;

            let _guard = self.locks.write(match_id).await;
            let service = self.service;
            with_txn(&self.db, move |txn| {
                Box::pin(async move { service.undo_ball(txn, match_id, innings_number).await })
            })
            .await
        }
        .instrument(span)
        .await
    }

    async fn scorecard(&self, match_id: i64) -> Result<Scorecard, AppError> {
        let _guard = self.locks.read(match_id).await;
        load_scorecard(&self.db, match_id)
            .instrument(info_span!("scorecard", match_id))
            .await
    }

    async fn current_over(&self, match_id: i64) -> Result<Option<OverCard>, AppError> {
        let card = self.scorecard(match_id).await?;
        Ok(card.current_over_card().cloned())
    }
}
