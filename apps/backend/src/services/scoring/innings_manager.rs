use sea_orm::DatabaseTransaction;
use tracing::info;

use super::{ScoringService, StartOutcome};
use crate::domain::innings_order::check_innings_order;
use crate::domain::models::{Innings, Match};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, RuleKind};
use crate::repos::{innings, matches};

impl ScoringService {
    /// Open innings 1 for a live match: the toss winner bats.
    pub async fn start_scoring(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
    ) -> Result<StartOutcome, AppError> {
        let m = matches::require_match(txn, match_id).await?;
        self.require_live(&m)?;

        if !innings::find_all_by_match(txn, match_id).await?.is_empty() {
            return Err(DomainError::rule(
                RuleKind::ScoringAlreadyStarted,
                format!("scoring has already started for match {match_id}"),
            )
            .into());
        }

        let first = innings::create_innings(txn, match_id, 1, m.toss_winner).await?;
        let m = matches::set_batting_team(txn, &m, m.toss_winner).await?;
        info!(match_id, batting_team = %m.toss_winner, "Scoring started");

        let scorecard = super::load_scorecard(txn, match_id).await?;
        Ok(StartOutcome {
            innings: first,
            scorecard,
        })
    }

    pub(super) fn require_live(&self, m: &Match) -> Result<(), AppError> {
        if !m.is_live() {
            return Err(DomainError::rule(
                RuleKind::MatchNotLive,
                format!("match is not live (status: {})", m.status.as_str()),
            )
            .into());
        }
        Ok(())
    }

    /// Validate the innings order and return the innings to write to,
    /// creating innings 1 on the first delivery of a match.
    pub(super) async fn ensure_innings(
        &self,
        txn: &DatabaseTransaction,
        m: &Match,
        innings_number: u8,
    ) -> Result<Innings, AppError> {
        let first = innings::find_by_match_and_number(txn, m.id, 1).await?;
        check_innings_order(m, first.as_ref(), innings_number)?;

        let target = match (innings_number, first) {
            (1, Some(first)) => first,
            (1, None) => {
                info!(match_id = m.id, "Creating first innings on first delivery");
                innings::create_innings(txn, m.id, 1, m.toss_winner).await?
            }
            (_, _) => innings::find_by_match_and_number(txn, m.id, innings_number)
                .await?
                .ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Innings,
                        format!("innings {innings_number} of match {} not found", m.id),
                    )
                })?,
        };

        if target.status.is_completed() {
            return Err(DomainError::rule(
                RuleKind::InningsCompleted,
                format!("innings {innings_number} is already completed"),
            )
            .into());
        }
        Ok(target)
    }

    /// Create innings 2 for the team not batting and hand them the crease.
    pub(super) async fn start_next_innings(
        &self,
        txn: &DatabaseTransaction,
        m: &Match,
    ) -> Result<(Innings, Match), AppError> {
        let current = m.batting_team.unwrap_or(m.toss_winner);
        let next_team = current.opposite();
        let second = innings::create_innings(txn, m.id, 2, next_team).await?;
        let m = matches::set_batting_team(txn, m, next_team).await?;
        info!(match_id = m.id, batting_team = %next_team, "Second innings started");
        Ok((second, m))
    }
}
