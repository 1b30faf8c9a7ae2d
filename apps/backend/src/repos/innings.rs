//! Innings repository functions for the scoring core.

use sea_orm::ConnectionTrait;

use super::{stored_count, to_column};
use crate::adapters::innings_sea as innings_adapter;
use crate::domain::models::Innings;
use crate::domain::tally::InningsTally;
use crate::domain::types::{PlayStatus, Team};
use crate::entities::innings;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn create_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    innings_number: u8,
    batting_team: Team,
) -> Result<Innings, DomainError> {
    let dto = innings_adapter::InningsCreate {
        match_id,
        innings_number: i32::from(innings_number),
        batting_team: batting_team.into(),
    };
    let model = innings_adapter::create_innings(conn, dto).await?;
    Innings::try_from(model)
}

pub async fn find_by_match_and_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    innings_number: u8,
) -> Result<Option<Innings>, DomainError> {
    innings_adapter::find_by_match_and_number(conn, match_id, i32::from(innings_number))
        .await?
        .map(Innings::try_from)
        .transpose()
}

pub async fn require_by_match_and_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    innings_number: u8,
) -> Result<Innings, DomainError> {
    find_by_match_and_number(conn, match_id, innings_number)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Innings,
                format!("innings {innings_number} of match {match_id} not found"),
            )
        })
}

/// All innings of a match (ordered by innings_number)
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<Innings>, DomainError> {
    innings_adapter::find_all_by_match(conn, match_id)
        .await?
        .into_iter()
        .map(Innings::try_from)
        .collect()
}

/// Overwrite the derived totals and status of an innings.
pub async fn save_totals<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
    tally: &InningsTally,
    status: PlayStatus,
) -> Result<Innings, DomainError> {
    let dto = innings_adapter::InningsTotals {
        id: innings_id,
        total_runs: to_column("total_runs", tally.runs)?,
        total_wickets: to_column("total_wickets", tally.wickets)?,
        total_overs: tally.overs,
        total_balls: to_column("total_balls", tally.legal_balls)?,
        status: status.into(),
    };
    Innings::try_from(innings_adapter::update_totals(conn, dto).await?)
}

/// Change only the status, keeping the stored totals.
pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Innings,
    status: PlayStatus,
) -> Result<Innings, DomainError> {
    let tally = InningsTally {
        runs: current.total_runs,
        wickets: current.total_wickets,
        legal_balls: current.total_balls,
        overs: current.total_overs,
    };
    save_totals(conn, current.id, &tally, status).await
}

// Conversions between SeaORM models and domain models

impl TryFrom<innings::Model> for Innings {
    type Error = DomainError;

    fn try_from(model: innings::Model) -> Result<Self, Self::Error> {
        let innings_number = u8::try_from(model.innings_number)
            .ok()
            .filter(|n| matches!(n, 1 | 2))
            .ok_or_else(|| {
                DomainError::corrupt(format!(
                    "innings {} has invalid innings_number {}",
                    model.id, model.innings_number
                ))
            })?;
        Ok(Self {
            id: model.id,
            match_id: model.match_id,
            innings_number,
            batting_team: model.batting_team.into(),
            total_runs: stored_count("total_runs", model.total_runs)?,
            total_wickets: stored_count("total_wickets", model.total_wickets)?,
            total_overs: model.total_overs,
            total_balls: stored_count("total_balls", model.total_balls)?,
            status: model.status.into(),
        })
    }
}

impl From<innings::Progress> for PlayStatus {
    fn from(progress: innings::Progress) -> Self {
        match progress {
            innings::Progress::InProgress => PlayStatus::InProgress,
            innings::Progress::Completed => PlayStatus::Completed,
        }
    }
}

impl From<PlayStatus> for innings::Progress {
    fn from(status: PlayStatus) -> Self {
        match status {
            PlayStatus::InProgress => innings::Progress::InProgress,
            PlayStatus::Completed => innings::Progress::Completed,
        }
    }
}
