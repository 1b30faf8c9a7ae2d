//! SeaORM adapter for balls repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::balls;

pub mod dto;

pub use dto::BallCreate;

/// Find all balls of an over (ordered by ball_number)
pub async fn find_all_by_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Vec<balls::Model>, sea_orm::DbErr> {
    balls::Entity::find()
        .filter(balls::Column::OverId.eq(over_id))
        .order_by(balls::Column::BallNumber, Order::Asc)
        .all(conn)
        .await
}

/// Balls of several overs at once, ordered by over then ball_number.
pub async fn find_all_by_overs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_ids: &[i64],
) -> Result<Vec<balls::Model>, sea_orm::DbErr> {
    if over_ids.is_empty() {
        return Ok(Vec::new());
    }
    balls::Entity::find()
        .filter(balls::Column::OverId.is_in(over_ids.iter().copied()))
        .order_by(balls::Column::OverId, Order::Asc)
        .order_by(balls::Column::BallNumber, Order::Asc)
        .all(conn)
        .await
}

/// Highest-numbered ball of an over.
pub async fn find_last_by_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Option<balls::Model>, sea_orm::DbErr> {
    balls::Entity::find()
        .filter(balls::Column::OverId.eq(over_id))
        .order_by(balls::Column::BallNumber, Order::Desc)
        .one(conn)
        .await
}

pub async fn create_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BallCreate,
) -> Result<balls::Model, sea_orm::DbErr> {
    let active = balls::ActiveModel {
        id: NotSet,
        over_id: Set(dto.over_id),
        ball_number: Set(dto.ball_number),
        ball_type: Set(dto.ball_type),
        run_type: Set(dto.run_type),
        runs: Set(dto.runs),
        byes: Set(dto.byes),
        is_wicket: Set(dto.is_wicket),
        wicket_type: Set(dto.wicket_type),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

pub async fn delete_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = balls::Entity::delete_by_id(ball_id).exec(conn).await?;
    Ok(result.rows_affected)
}
