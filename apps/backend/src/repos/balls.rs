//! Ball repository functions for the scoring core.

use sea_orm::ConnectionTrait;

use super::{stored_count, to_column};
use crate::adapters::balls_sea as balls_adapter;
use crate::domain::ball_event::ValidatedBall;
use crate::domain::models::Ball;
use crate::domain::types::{BallType, RunType, WicketType};
use crate::entities::balls;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn create_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
    ball_number: u32,
    ball: &ValidatedBall,
) -> Result<Ball, DomainError> {
    let dto = balls_adapter::BallCreate {
        over_id,
        ball_number: to_column("ball_number", ball_number)?,
        ball_type: ball.ball_type.into(),
        run_type: ball.run_type.as_string(),
        runs: to_column("runs", ball.runs)?,
        byes: to_column("byes", ball.byes)?,
        is_wicket: ball.is_wicket,
        wicket_type: ball.wicket_type.map(|wt| wt.as_str().to_string()),
    };
    Ball::try_from(balls_adapter::create_ball(conn, dto).await?)
}

/// All balls of an over (ordered by ball_number)
pub async fn find_all_by_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Vec<Ball>, DomainError> {
    balls_adapter::find_all_by_over(conn, over_id)
        .await?
        .into_iter()
        .map(Ball::try_from)
        .collect()
}

/// Balls of several overs, ordered by over then ball_number.
pub async fn find_all_by_overs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_ids: &[i64],
) -> Result<Vec<Ball>, DomainError> {
    balls_adapter::find_all_by_overs(conn, over_ids)
        .await?
        .into_iter()
        .map(Ball::try_from)
        .collect()
}

pub async fn find_last_by_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Option<Ball>, DomainError> {
    balls_adapter::find_last_by_over(conn, over_id)
        .await?
        .map(Ball::try_from)
        .transpose()
}

/// Next slot in the over's ball sequence; legal and illegal deliveries share it.
pub async fn next_ball_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<u32, DomainError> {
    let last = find_last_by_over(conn, over_id).await?;
    Ok(last.map_or(1, |b| b.ball_number + 1))
}

pub async fn delete_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<(), DomainError> {
    let deleted = balls_adapter::delete_ball(conn, ball_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Ball,
            format!("ball {ball_id} not found"),
        ));
    }
    Ok(())
}

// Conversions between SeaORM models and domain models

impl TryFrom<balls::Model> for Ball {
    type Error = DomainError;

    fn try_from(model: balls::Model) -> Result<Self, Self::Error> {
        let corrupt = |what: &str, raw: &str| {
            DomainError::corrupt(format!("ball {} has unknown {what} '{raw}'", model.id))
        };
        let run_type: RunType = model
            .run_type
            .parse()
            .map_err(|_| corrupt("run_type", &model.run_type))?;
        let wicket_type = match model.wicket_type.as_deref() {
            Some(raw) => Some(
                raw.parse::<WicketType>()
                    .map_err(|_| corrupt("wicket_type", raw))?,
            ),
            None => None,
        };
        Ok(Self {
            id: model.id,
            over_id: model.over_id,
            ball_number: stored_count("ball_number", model.ball_number)?,
            ball_type: model.ball_type.into(),
            run_type,
            runs: stored_count("runs", model.runs)?,
            byes: stored_count("byes", model.byes)?,
            is_wicket: model.is_wicket,
            wicket_type,
        })
    }
}

impl From<balls::Delivery> for BallType {
    fn from(delivery: balls::Delivery) -> Self {
        match delivery {
            balls::Delivery::Good => BallType::Good,
            balls::Delivery::Wide => BallType::Wide,
            balls::Delivery::NoBall => BallType::NoBall,
        }
    }
}

impl From<BallType> for balls::Delivery {
    fn from(ball_type: BallType) -> Self {
        match ball_type {
            BallType::Good => balls::Delivery::Good,
            BallType::Wide => balls::Delivery::Wide,
            BallType::NoBall => balls::Delivery::NoBall,
        }
    }
}
