//! SeaORM adapter for innings repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::innings;

pub mod dto;

pub use dto::{InningsCreate, InningsTotals};

/// Find an innings by match_id and innings_number
pub async fn find_by_match_and_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    innings_number: i32,
) -> Result<Option<innings::Model>, sea_orm::DbErr> {
    innings::Entity::find()
        .filter(innings::Column::MatchId.eq(match_id))
        .filter(innings::Column::InningsNumber.eq(innings_number))
        .one(conn)
        .await
}

/// Find all innings for a match (ordered by innings_number)
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<innings::Model>, sea_orm::DbErr> {
    innings::Entity::find()
        .filter(innings::Column::MatchId.eq(match_id))
        .order_by(innings::Column::InningsNumber, Order::Asc)
        .all(conn)
        .await
}

pub async fn create_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InningsCreate,
) -> Result<innings::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = innings::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        innings_number: Set(dto.innings_number),
        batting_team: Set(dto.batting_team),
        total_runs: Set(0),
        total_wickets: Set(0),
        total_overs: Set(0.0),
        total_balls: Set(0),
        status: Set(innings::Progress::InProgress),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn update_totals<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InningsTotals,
) -> Result<innings::Model, sea_orm::DbErr> {
    let active = innings::ActiveModel {
        id: Set(dto.id),
        match_id: NotSet,
        innings_number: NotSet,
        batting_team: NotSet,
        total_runs: Set(dto.total_runs),
        total_wickets: Set(dto.total_wickets),
        total_overs: Set(dto.total_overs),
        total_balls: Set(dto.total_balls),
        status: Set(dto.status),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.update(conn).await
}
