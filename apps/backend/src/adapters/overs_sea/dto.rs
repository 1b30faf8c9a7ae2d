//! DTOs for overs_sea adapter.

use crate::entities::innings::Progress;

#[derive(Debug, Clone)]
pub struct OverCreate {
    pub innings_id: i64,
    pub over_number: i32,
}

/// Full replacement of the derived over aggregates.
#[derive(Debug, Clone)]
pub struct OverTotals {
    pub id: i64,
    pub total_runs: i32,
    pub total_balls: i32,
    pub total_wickets: i32,
    pub status: Progress,
}
