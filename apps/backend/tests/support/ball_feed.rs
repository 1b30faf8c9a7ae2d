use scoring_backend::domain::BallEvent;
use scoring_backend::services::BallOutcome;
use scoring_backend::{AppError, LiveScoring};

/// Record one good ball per entry, returning every outcome in order.
pub async fn feed_runs(
    scoring: &impl LiveScoring,
    match_id: i64,
    innings_number: u8,
    runs: &[u8],
) -> Result<Vec<BallOutcome>, AppError> {
    let mut outcomes = Vec::with_capacity(runs.len());
    for &r in runs {
        outcomes.push(
            scoring
                .add_ball(BallEvent::good(match_id, innings_number, r))
                .await?,
        );
    }
    Ok(outcomes)
}

pub async fn feed_dots(
    scoring: &impl LiveScoring,
    match_id: i64,
    innings_number: u8,
    count: usize,
) -> Result<Vec<BallOutcome>, AppError> {
    feed_runs(scoring, match_id, innings_number, &vec![0; count]).await
}
