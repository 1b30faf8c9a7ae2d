// Builders for domain records used by unit and property tests.

use crate::domain::models::{Ball, Innings, Match, Over};
use crate::domain::rules;
use crate::domain::tally::{InningsTally, OverTally};
use crate::domain::types::{
    BallType, MatchStatus, PlayStatus, RunType, Team, TossDecision, WicketType,
};

pub fn live_match(total_overs: u32) -> Match {
    Match {
        id: 1,
        team_a_name: "Lions".to_string(),
        team_b_name: "Tigers".to_string(),
        team_a_player_count: 11,
        team_b_player_count: 11,
        total_overs,
        toss_winner: Team::A,
        toss_decision: TossDecision::Bat,
        batting_team: Some(Team::A),
        status: MatchStatus::Live,
        lock_version: 1,
    }
}

pub fn good(ball_number: u32, runs: u8) -> Ball {
    Ball {
        id: i64::from(ball_number),
        over_id: 1,
        ball_number,
        ball_type: BallType::Good,
        run_type: RunType::Runs(runs),
        runs: rules::run_value(RunType::Runs(runs)),
        byes: 0,
        is_wicket: false,
        wicket_type: None,
    }
}

pub fn wide(ball_number: u32, byes: u32) -> Ball {
    Ball {
        ball_type: BallType::Wide,
        run_type: RunType::Wide,
        runs: 1,
        byes,
        ..good(ball_number, 0)
    }
}

pub fn no_ball(ball_number: u32) -> Ball {
    Ball {
        ball_type: BallType::NoBall,
        run_type: RunType::NoBall,
        runs: 1,
        ..good(ball_number, 0)
    }
}

pub fn wicket(ball_number: u32) -> Ball {
    Ball {
        run_type: RunType::WicketCall,
        is_wicket: true,
        wicket_type: Some(WicketType::Bowled),
        ..good(ball_number, 0)
    }
}

/// An over whose aggregates are derived from `balls`.
pub fn over_from(over_number: u32, balls: &[Ball]) -> Over {
    let tally = OverTally::from_balls(balls).expect("fixture over fits in u32");
    Over {
        id: i64::from(over_number),
        innings_id: 1,
        over_number,
        total_runs: tally.runs,
        total_balls: tally.legal_balls,
        total_wickets: tally.wickets,
        status: tally.status(),
    }
}

/// An innings whose aggregates are derived from `overs`.
pub fn innings_from(innings_number: u8, batting_team: Team, overs: &[Over]) -> Innings {
    let tally = InningsTally::from_overs(overs).expect("fixture innings fits in u32");
    Innings {
        id: i64::from(innings_number),
        match_id: 1,
        innings_number,
        batting_team,
        total_runs: tally.runs,
        total_wickets: tally.wickets,
        total_overs: tally.overs,
        total_balls: tally.legal_balls,
        status: PlayStatus::InProgress,
    }
}

pub fn innings_totals(
    innings_number: u8,
    batting_team: Team,
    runs: u32,
    wickets: u32,
    overs: f64,
) -> Innings {
    Innings {
        id: i64::from(innings_number),
        match_id: 1,
        innings_number,
        batting_team,
        total_runs: runs,
        total_wickets: wickets,
        total_overs: overs,
        total_balls: 0,
        status: PlayStatus::InProgress,
    }
}
