use scoring_backend::domain::models::Match;
use scoring_backend::domain::types::{MatchStatus, Team, TossDecision};
use scoring_backend::repos::matches::{create_match, NewMatch};
use scoring_backend::state::app_state::AppState;
use scoring_backend::{AppError, LiveScoring};

/// Team A wins the toss and bats; eleven a side.
pub fn new_match(total_overs: u32) -> NewMatch {
    NewMatch {
        team_a_name: "Lions".to_string(),
        team_b_name: "Tigers".to_string(),
        team_a_player_count: 11,
        team_b_player_count: 11,
        total_overs,
        toss_winner: Team::A,
        toss_decision: TossDecision::Bat,
        status: MatchStatus::Live,
    }
}

pub async fn create_match_with(state: &AppState, new_match: NewMatch) -> Result<Match, AppError> {
    Ok(create_match(state.db(), new_match).await?)
}

pub async fn create_live_match(state: &AppState, total_overs: u32) -> Result<Match, AppError> {
    create_match_with(state, new_match(total_overs)).await
}

/// A live match with innings 1 already opened through `start_scoring`.
pub async fn started_match(
    state: &AppState,
    scoring: &impl LiveScoring,
    total_overs: u32,
) -> Result<Match, AppError> {
    let m = create_live_match(state, total_overs).await?;
    scoring.start_scoring(m.id).await?;
    Ok(m)
}
