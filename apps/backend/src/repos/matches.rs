//! Match repository functions for the scoring core.

use sea_orm::ConnectionTrait;

use super::stored_count;
use crate::adapters::matches_sea as matches_adapter;
use crate::domain::models::Match;
use crate::domain::types::{MatchStatus, Team, TossDecision};
use crate::entities::matches;
use crate::errors::domain::DomainError;

/// Fields needed to register a match. Match CRUD is owned elsewhere; this
/// exists for seeding and tests.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_player_count: u32,
    pub team_b_player_count: u32,
    pub total_overs: u32,
    pub toss_winner: Team,
    pub toss_decision: TossDecision,
    pub status: MatchStatus,
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_match: NewMatch,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchCreate {
        team_a_name: new_match.team_a_name,
        team_b_name: new_match.team_b_name,
        team_a_player_count: super::to_column("team_a_player_count", new_match.team_a_player_count)?,
        team_b_player_count: super::to_column("team_b_player_count", new_match.team_b_player_count)?,
        total_overs: super::to_column("total_overs", new_match.total_overs)?,
        toss_winner: new_match.toss_winner.into(),
        toss_decision: new_match.toss_decision.into(),
        status: new_match.status.into(),
    };
    let model = matches_adapter::create_match(conn, dto).await?;
    Match::try_from(model)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    matches_adapter::find_by_id(conn, match_id)
        .await?
        .map(Match::try_from)
        .transpose()
}

/// Load a match or fail with `NotFound(Match)`.
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    let model = matches_adapter::require_match(conn, match_id).await?;
    Match::try_from(model)
}

/// Set the batting team, guarded by the match version.
pub async fn set_batting_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
    team: Team,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdateScoring::new(current.id, current.lock_version)
        .with_batting_team(team.into());
    Match::try_from(matches_adapter::update_scoring(conn, dto).await?)
}

pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
    status: MatchStatus,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdateScoring::new(current.id, current.lock_version)
        .with_status(status.into());
    Match::try_from(matches_adapter::update_scoring(conn, dto).await?)
}

/// Bump `lock_version` without changing anything else.
pub async fn touch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdateScoring::new(current.id, current.lock_version);
    Match::try_from(matches_adapter::update_scoring(conn, dto).await?)
}

// Conversions between SeaORM models and domain models

impl TryFrom<matches::Model> for Match {
    type Error = DomainError;

    fn try_from(model: matches::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            team_a_player_count: stored_count("team_a_player_count", model.team_a_player_count)?,
            team_b_player_count: stored_count("team_b_player_count", model.team_b_player_count)?,
            total_overs: stored_count("total_overs", model.total_overs)?,
            team_a_name: model.team_a_name,
            team_b_name: model.team_b_name,
            toss_winner: model.toss_winner.into(),
            toss_decision: model.toss_decision.into(),
            batting_team: model.batting_team.map(Team::from),
            status: model.status.into(),
            lock_version: model.lock_version,
        })
    }
}

impl From<matches::TeamSide> for Team {
    fn from(side: matches::TeamSide) -> Self {
        match side {
            matches::TeamSide::A => Team::A,
            matches::TeamSide::B => Team::B,
        }
    }
}

impl From<Team> for matches::TeamSide {
    fn from(team: Team) -> Self {
        match team {
            Team::A => matches::TeamSide::A,
            Team::B => matches::TeamSide::B,
        }
    }
}

impl From<matches::TossChoice> for TossDecision {
    fn from(choice: matches::TossChoice) -> Self {
        match choice {
            matches::TossChoice::Bat => TossDecision::Bat,
            matches::TossChoice::Bowl => TossDecision::Bowl,
        }
    }
}

impl From<TossDecision> for matches::TossChoice {
    fn from(decision: TossDecision) -> Self {
        match decision {
            TossDecision::Bat => matches::TossChoice::Bat,
            TossDecision::Bowl => matches::TossChoice::Bowl,
        }
    }
}

impl From<matches::MatchState> for MatchStatus {
    fn from(state: matches::MatchState) -> Self {
        match state {
            matches::MatchState::Scheduled => MatchStatus::Scheduled,
            matches::MatchState::Live => MatchStatus::Live,
            matches::MatchState::Completed => MatchStatus::Completed,
            matches::MatchState::Cancelled => MatchStatus::Cancelled,
        }
    }
}

impl From<MatchStatus> for matches::MatchState {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Scheduled => matches::MatchState::Scheduled,
            MatchStatus::Live => matches::MatchState::Live,
            MatchStatus::Completed => matches::MatchState::Completed,
            MatchStatus::Cancelled => matches::MatchState::Cancelled,
        }
    }
}
