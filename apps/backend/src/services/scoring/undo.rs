use sea_orm::DatabaseTransaction;
use tracing::info;

use super::{ScoringService, UndoOutcome};
use crate::domain::ball_event::check_innings_number;
use crate::domain::completion::{first_innings_complete, should_complete_match};
use crate::domain::models::{Innings, Match};
use crate::domain::tally::OverTally;
use crate::domain::types::{MatchStatus, PlayStatus};
use crate::error::AppError;
use crate::errors::domain::{DomainError, RuleKind};
use crate::repos::{balls, innings, matches, overs};

impl ScoringService {
    /// Remove the most recent ball of an innings and re-derive every aggregate
    /// it touched, reopening the over, innings or match as needed.
    pub async fn undo_ball(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
        innings_number: u8,
    ) -> Result<UndoOutcome, AppError> {
        check_innings_number(innings_number)?;

        let m = matches::require_match(txn, match_id).await?;
        let completed_chase = m.status == MatchStatus::Completed && innings_number == 2;
        if !completed_chase {
            self.require_live(&m)?;
        }
        let start_version = m.lock_version;

        let target = innings::require_by_match_and_number(txn, match_id, innings_number).await?;
        if innings_number == 1
            && innings::find_by_match_and_number(txn, match_id, 2)
                .await?
                .is_some()
        {
            return Err(DomainError::rule(
                RuleKind::UndoAcrossInnings,
                "cannot undo a first-innings ball once the second innings has started",
            )
            .into());
        }

        let nothing_to_undo = || DomainError::rule(RuleKind::NothingToUndo, "no balls to undo");
        let over = overs::find_latest(txn, target.id)
            .await?
            .ok_or_else(nothing_to_undo)?;
        let last = balls::find_last_by_over(txn, over.id)
            .await?
            .ok_or_else(nothing_to_undo)?;

        balls::delete_ball(txn, last.id).await?;

        let remaining = balls::find_all_by_over(txn, over.id).await?;
        let (over_removed, over_reopened) = if remaining.is_empty() {
            overs::delete_over(txn, over.id).await?;
            (true, false)
        } else {
            let tally = OverTally::from_balls(&remaining)?;
            let saved = overs::save_tally(txn, over.id, &tally).await?;
            (false, over.status.is_completed() && !saved.status.is_completed())
        };

        let (updated, _) = self.rederive_innings(txn, &target).await?;
        let still_complete = self.innings_still_complete(txn, &m, &updated).await?;

        let mut innings_reopened = false;
        let mut match_reopened = false;
        let mut m = m;
        if updated.status.is_completed() && !still_complete {
            innings::set_status(txn, &updated, PlayStatus::InProgress).await?;
            innings_reopened = true;
            if m.status == MatchStatus::Completed {
                m = matches::set_status(txn, &m, MatchStatus::Live).await?;
                match_reopened = true;
            }
        }
        if m.lock_version == start_version {
            matches::touch(txn, &m).await?;
        }

        info!(
            match_id,
            innings_number,
            over_number = over.over_number,
            ball_number = last.ball_number,
            over_removed,
            innings_reopened,
            match_reopened,
            "Ball undone"
        );

        let scorecard = super::load_scorecard(txn, match_id).await?;
        Ok(UndoOutcome {
            removed: last,
            innings_number,
            over_number: over.over_number,
            over_removed,
            over_reopened,
            innings_reopened,
            match_reopened,
            scorecard,
        })
    }

    /// Whether an innings still meets its completion threshold after an undo.
    async fn innings_still_complete(
        &self,
        txn: &DatabaseTransaction,
        m: &Match,
        current: &Innings,
    ) -> Result<bool, AppError> {
        let mut open = current.clone();
        open.status = PlayStatus::InProgress;
        if current.innings_number == 1 {
            return Ok(first_innings_complete(&open, m));
        }
        let first = innings::require_by_match_and_number(txn, m.id, 1).await?;
        Ok(should_complete_match(&first, &open, m).complete)
    }
}
