use sea_orm::DatabaseTransaction;
use tracing::info;

use super::ScoringService;
use crate::domain::completion::{first_innings_complete, should_complete_match, MatchResult};
use crate::domain::models::{Innings, Match};
use crate::domain::tally::InningsTally;
use crate::domain::types::{MatchStatus, PlayStatus};
use crate::error::AppError;
use crate::repos::{innings, matches, overs};

/// What a completion pass changed.
#[derive(Debug)]
pub(super) struct CompletionEffects {
    pub innings: Innings,
    pub m: Match,
    pub innings_completed: bool,
    pub match_completed: bool,
    pub reason: Option<String>,
    pub started_innings: Option<Innings>,
}

impl ScoringService {
    /// Recompute an innings' totals from all of its overs.
    pub(super) async fn rederive_innings(
        &self,
        txn: &DatabaseTransaction,
        current: &Innings,
    ) -> Result<(Innings, InningsTally), AppError> {
        let all_overs = overs::find_all_by_innings(txn, current.id).await?;
        let tally = InningsTally::from_overs(&all_overs)?;
        let updated = innings::save_totals(txn, current.id, &tally, current.status).await?;
        Ok((updated, tally))
    }

    /// Close the innings (and the match, or open innings 2) when a threshold is hit.
    pub(super) async fn apply_completion(
        &self,
        txn: &DatabaseTransaction,
        m: Match,
        current: Innings,
    ) -> Result<CompletionEffects, AppError> {
        if current.innings_number == 1 {
            if !first_innings_complete(&current, &m) {
                return Ok(CompletionEffects::unchanged(m, current, None));
            }
            let closed = innings::set_status(txn, &current, PlayStatus::Completed).await?;
            info!(
                match_id = m.id,
                runs = closed.total_runs,
                wickets = closed.total_wickets,
                overs = closed.total_overs,
                "First innings completed"
            );
            let (second, m) = self.start_next_innings(txn, &m).await?;
            return Ok(CompletionEffects {
                innings: closed,
                m,
                innings_completed: true,
                match_completed: false,
                reason: Some("first innings completed".to_string()),
                started_innings: Some(second),
            });
        }

        let first = innings::require_by_match_and_number(txn, m.id, 1).await?;
        let check = should_complete_match(&first, &current, &m);
        if !check.complete {
            return Ok(CompletionEffects::unchanged(m, current, Some(check.reason)));
        }

        let closed = innings::set_status(txn, &current, PlayStatus::Completed).await?;
        let m = matches::set_status(txn, &m, MatchStatus::Completed).await?;
        info!(
            match_id = m.id,
            reason = %check.reason,
            result = %MatchResult::decide(&first, &closed, &m),
            "Match completed"
        );
        Ok(CompletionEffects {
            innings: closed,
            m,
            innings_completed: true,
            match_completed: true,
            reason: Some(check.reason),
            started_innings: None,
        })
    }
}

impl CompletionEffects {
    fn unchanged(m: Match, innings: Innings, reason: Option<String>) -> Self {
        Self {
            innings,
            m,
            innings_completed: false,
            match_completed: false,
            reason,
            started_innings: None,
        }
    }
}
