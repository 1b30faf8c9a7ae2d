//! Rule primitives: pure cricket arithmetic shared by every scoring path.

use crate::domain::types::{BallType, RunType};

pub const BALLS_PER_OVER: u32 = 6;

/// Wickets that end an over or a first innings regardless of team size.
pub const ALL_OUT_WICKETS: u32 = 10;

/// Most byes one delivery can yield: a run of three plus four overthrows.
pub const MAX_BYES_PER_BALL: u32 = 7;

/// Runs credited by a run type, excluding byes.
pub fn run_value(run_type: RunType) -> u32 {
    match run_type {
        RunType::Runs(n) => u32::from(n),
        RunType::WicketCall => 0,
        RunType::Wide | RunType::NoBall => 1,
    }
}

/// Only `good` deliveries count toward the six-ball over.
pub fn is_legal_delivery(ball_type: BallType) -> bool {
    matches!(ball_type, BallType::Good)
}

/// Cricket decimal overs: `completed + balls/10`, with a full six-ball over
/// rendered as `+1.0` instead of `0.6`.
///
/// Computed as a single division so `2.3` compares equal to the literal.
pub fn decimal_overs(completed_overs: u32, legal_balls_in_open_over: u32) -> f64 {
    if legal_balls_in_open_over >= BALLS_PER_OVER {
        return f64::from(completed_overs + 1);
    }
    f64::from(completed_overs * 10 + legal_balls_in_open_over) / 10.0
}

/// Runs the second innings needs to win outright.
pub fn target(first_innings_runs: u32) -> u32 {
    first_innings_runs + 1
}

pub fn over_is_complete(legal_balls: u32, wickets: u32) -> bool {
    legal_balls >= BALLS_PER_OVER || wickets >= ALL_OUT_WICKETS
}

/// First-innings completion uses the fixed ten-wicket ceiling.
pub fn first_innings_is_complete(wickets: u32, overs: f64, total_overs: u32) -> bool {
    wickets >= ALL_OUT_WICKETS || overs >= f64::from(total_overs)
}

/// Wickets that end the chase, derived from team A's squad size.
pub fn max_wickets(team_a_player_count: u32) -> u32 {
    team_a_player_count.saturating_sub(1)
}
