//! DTOs for innings_sea adapter.

use crate::entities::innings::Progress;
use crate::entities::matches::TeamSide;

#[derive(Debug, Clone)]
pub struct InningsCreate {
    pub match_id: i64,
    pub innings_number: i32,
    pub batting_team: TeamSide,
}

/// Full replacement of the derived innings aggregates.
#[derive(Debug, Clone)]
pub struct InningsTotals {
    pub id: i64,
    pub total_runs: i32,
    pub total_wickets: i32,
    pub total_overs: f64,
    pub total_balls: i32,
    pub status: Progress,
}
