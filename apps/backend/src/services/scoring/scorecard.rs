use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::domain::models::Ball;
use crate::domain::scorecard::{build_scorecard, InningsWithOvers, OverWithBalls, Scorecard};
use crate::error::AppError;
use crate::repos::{balls, innings, matches, overs};

/// Load a match with all of its innings, overs and balls and build the card.
pub async fn load_scorecard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Scorecard, AppError> {
    let m = matches::require_match(conn, match_id).await?;

    let mut tree = Vec::new();
    for inn in innings::find_all_by_match(conn, match_id).await? {
        let inn_overs = overs::find_all_by_innings(conn, inn.id).await?;
        let over_ids: Vec<i64> = inn_overs.iter().map(|o| o.id).collect();

        let mut by_over: HashMap<i64, Vec<Ball>> = HashMap::new();
        for ball in balls::find_all_by_overs(conn, &over_ids).await? {
            by_over.entry(ball.over_id).or_default().push(ball);
        }

        let overs = inn_overs
            .into_iter()
            .map(|over| OverWithBalls {
                balls: by_over.remove(&over.id).unwrap_or_default(),
                over,
            })
            .collect();
        tree.push(InningsWithOvers {
            innings: inn,
            overs,
        });
    }

    Ok(build_scorecard(&m, &tree))
}
