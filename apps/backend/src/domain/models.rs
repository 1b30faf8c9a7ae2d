//! Domain records for a match and its innings, overs and balls.
//!
//! Repositories build these from storage rows; nothing in here knows about
//! the database.

use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BallType, MatchStatus, PlayStatus, RunType, Team, TossDecision, WicketType,
};

/// The slice of a match the scoring core reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_player_count: u32,
    pub team_b_player_count: u32,
    pub total_overs: u32,
    pub toss_winner: Team,
    pub toss_decision: TossDecision,
    pub batting_team: Option<Team>,
    pub status: MatchStatus,
    pub lock_version: i32,
}

impl Match {
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a_name,
            Team::B => &self.team_b_name,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }

    /// The team that bats in `innings_number` (1 or 2).
    pub fn expected_batting_team(&self, innings_number: u8) -> Team {
        if innings_number == 1 {
            self.toss_winner
        } else {
            self.toss_winner.opposite()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    pub id: i64,
    pub match_id: i64,
    pub innings_number: u8,
    pub batting_team: Team,
    pub total_runs: u32,
    pub total_wickets: u32,
    pub total_overs: f64,
    pub total_balls: u32,
    pub status: PlayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Over {
    pub id: i64,
    pub innings_id: i64,
    pub over_number: u32,
    pub total_runs: u32,
    pub total_balls: u32,
    pub total_wickets: u32,
    pub status: PlayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub id: i64,
    pub over_id: i64,
    pub ball_number: u32,
    pub ball_type: BallType,
    pub run_type: RunType,
    pub runs: u32,
    pub byes: u32,
    pub is_wicket: bool,
    pub wicket_type: Option<WicketType>,
}

impl Ball {
    pub fn contributed_runs(&self) -> u32 {
        self.runs + self.byes
    }
}
