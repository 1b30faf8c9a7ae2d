//! Over repository functions for the scoring core.

use sea_orm::ConnectionTrait;

use super::{stored_count, to_column};
use crate::adapters::overs_sea as overs_adapter;
use crate::domain::models::Over;
use crate::domain::tally::OverTally;
use crate::entities::overs;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn create_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
    over_number: u32,
) -> Result<Over, DomainError> {
    let dto = overs_adapter::OverCreate {
        innings_id,
        over_number: to_column("over_number", over_number)?,
    };
    Over::try_from(overs_adapter::create_over(conn, dto).await?)
}

/// All overs of an innings (ordered by over_number)
pub async fn find_all_by_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Vec<Over>, DomainError> {
    overs_adapter::find_all_by_innings(conn, innings_id)
        .await?
        .into_iter()
        .map(Over::try_from)
        .collect()
}

/// Most recent in-progress over of an innings.
pub async fn find_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Option<Over>, DomainError> {
    overs_adapter::find_current(conn, innings_id)
        .await?
        .map(Over::try_from)
        .transpose()
}

/// Highest-numbered over of an innings, whatever its status.
pub async fn find_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Option<Over>, DomainError> {
    overs_adapter::find_latest(conn, innings_id)
        .await?
        .map(Over::try_from)
        .transpose()
}

/// Overwrite the derived totals of an over; status follows the tally.
pub async fn save_tally<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
    tally: &OverTally,
) -> Result<Over, DomainError> {
    let dto = overs_adapter::OverTotals {
        id: over_id,
        total_runs: to_column("total_runs", tally.runs)?,
        total_balls: to_column("total_balls", tally.legal_balls)?,
        total_wickets: to_column("total_wickets", tally.wickets)?,
        status: tally.status().into(),
    };
    Over::try_from(overs_adapter::update_totals(conn, dto).await?)
}

/// Force an over closed without touching its totals.
pub async fn complete_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over: &Over,
) -> Result<Over, DomainError> {
    let dto = overs_adapter::OverTotals {
        id: over.id,
        total_runs: to_column("total_runs", over.total_runs)?,
        total_balls: to_column("total_balls", over.total_balls)?,
        total_wickets: to_column("total_wickets", over.total_wickets)?,
        status: overs::Progress::Completed,
    };
    Over::try_from(overs_adapter::update_totals(conn, dto).await?)
}

pub async fn delete_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<(), DomainError> {
    let deleted = overs_adapter::delete_over(conn, over_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Over,
            format!("over {over_id} not found"),
        ));
    }
    Ok(())
}

// Conversions between SeaORM models and domain models

impl TryFrom<overs::Model> for Over {
    type Error = DomainError;

    fn try_from(model: overs::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            innings_id: model.innings_id,
            over_number: stored_count("over_number", model.over_number)?,
            total_runs: stored_count("total_runs", model.total_runs)?,
            total_balls: stored_count("total_balls", model.total_balls)?,
            total_wickets: stored_count("total_wickets", model.total_wickets)?,
            status: model.status.into(),
        })
    }
}
