//! DTOs for matches_sea adapter.

use crate::entities::matches::{MatchState, TeamSide, TossChoice};

/// DTO for creating a match record.
#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_player_count: i32,
    pub team_b_player_count: i32,
    pub total_overs: i32,
    pub toss_winner: TeamSide,
    pub toss_decision: TossChoice,
    pub status: MatchState,
}

/// DTO for the scoring-owned columns of a match. `None` leaves a column as is;
/// an update with neither set only bumps `lock_version`.
#[derive(Debug, Clone)]
pub struct MatchUpdateScoring {
    pub id: i64,
    pub current_lock_version: i32,
    pub status: Option<MatchState>,
    pub batting_team: Option<TeamSide>,
}

impl MatchUpdateScoring {
    pub fn new(id: i64, current_lock_version: i32) -> Self {
        Self {
            id,
            current_lock_version,
            status: None,
            batting_team: None,
        }
    }

    pub fn with_status(mut self, status: MatchState) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_batting_team(mut self, team: TeamSide) -> Self {
        self.batting_team = Some(team);
        self
    }
}
