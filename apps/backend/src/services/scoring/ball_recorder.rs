use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::{BallOutcome, ScoringService};
use crate::domain::ball_event::ValidatedBall;
use crate::error::AppError;
use crate::repos::{balls, matches};

impl ScoringService {
    /// Record one validated delivery and cascade over, innings and match completion.
    pub async fn add_ball(
        &self,
        txn: &DatabaseTransaction,
        match_id: i64,
        ball: ValidatedBall,
    ) -> Result<BallOutcome, AppError> {
        let m = matches::require_match(txn, match_id).await?;
        self.require_live(&m)?;
        let start_version = m.lock_version;

        let innings = self.ensure_innings(txn, &m, ball.innings_number).await?;
        let over = self.current_over(txn, &innings).await?;
        let ball_number = self.next_ball_number(txn, &over).await?;

        let stored = balls::create_ball(txn, over.id, ball_number, &ball).await?;
        let over = self.record_delivery(txn, &over, &ball).await?;
        debug!(
            over_number = over.over_number,
            ball_number,
            ball_type = ball.ball_type.as_str(),
            run_type = %ball.run_type,
            runs = ball.runs,
            byes = ball.byes,
            is_wicket = ball.is_wicket,
            "Ball recorded"
        );

        let (innings, _) = self.rederive_innings(txn, &innings).await?;
        let effects = self.apply_completion(txn, m, innings).await?;

        let m = effects.m;
        if m.lock_version == start_version {
            matches::touch(txn, &m).await?;
        }

        let scorecard = super::load_scorecard(txn, match_id).await?;
        Ok(BallOutcome {
            ball: stored,
            over_completed: over.status.is_completed(),
            over,
            innings: effects.innings,
            innings_completed: effects.innings_completed,
            match_completed: effects.match_completed,
            completion_reason: effects.reason,
            started_innings: effects.started_innings,
            scorecard,
        })
    }
}
