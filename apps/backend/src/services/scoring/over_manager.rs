use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::ScoringService;
use crate::domain::ball_event::ValidatedBall;
use crate::domain::models::{Innings, Over};
use crate::domain::rules::BALLS_PER_OVER;
use crate::domain::tally::OverTally;
use crate::error::AppError;
use crate::errors::domain::{DomainError, RuleKind};
use crate::repos::{balls, overs};

impl ScoringService {
    /// The open over of an innings, creating the next one when none is open.
    ///
    /// An open over that already holds six legal balls is closed first and
    /// play rolls onto a fresh over.
    pub(super) async fn current_over(
        &self,
        txn: &DatabaseTransaction,
        innings: &Innings,
    ) -> Result<Over, AppError> {
        if let Some(open) = overs::find_current(txn, innings.id).await? {
            if open.total_balls < BALLS_PER_OVER {
                return Ok(open);
            }
            debug!(over_number = open.over_number, "Rolling full over");
            overs::complete_over(txn, &open).await?;
        }

        let next_number = overs::find_latest(txn, innings.id)
            .await?
            .map_or(1, |o| o.over_number + 1);
        debug!(innings_id = innings.id, over_number = next_number, "Opening over");
        Ok(overs::create_over(txn, innings.id, next_number).await?)
    }

    pub(super) async fn next_ball_number(
        &self,
        txn: &DatabaseTransaction,
        over: &Over,
    ) -> Result<u32, AppError> {
        if over.total_balls >= BALLS_PER_OVER {
            return Err(DomainError::rule(
                RuleKind::OverCompleted,
                format!("over {} is already completed", over.over_number),
            )
            .into());
        }
        Ok(balls::next_ball_number(txn, over.id).await?)
    }

    /// Fold one persisted delivery into its over's totals.
    pub(super) async fn record_delivery(
        &self,
        txn: &DatabaseTransaction,
        over: &Over,
        ball: &ValidatedBall,
    ) -> Result<Over, AppError> {
        let mut tally = OverTally::from_over(over);
        tally.record(ball.ball_type, ball.contributed_runs(), ball.is_wicket)?;
        Ok(overs::save_tally(txn, over.id, &tally).await?)
    }
}
