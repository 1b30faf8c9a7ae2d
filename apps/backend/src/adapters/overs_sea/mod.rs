//! SeaORM adapter for overs repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::innings::Progress;
use crate::entities::overs;

pub mod dto;

pub use dto::{OverCreate, OverTotals};

/// Find all overs for an innings (ordered by over_number)
pub async fn find_all_by_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Vec<overs::Model>, sea_orm::DbErr> {
    overs::Entity::find()
        .filter(overs::Column::InningsId.eq(innings_id))
        .order_by(overs::Column::OverNumber, Order::Asc)
        .all(conn)
        .await
}

/// Most recent in-progress over of an innings.
pub async fn find_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Option<overs::Model>, sea_orm::DbErr> {
    overs::Entity::find()
        .filter(overs::Column::InningsId.eq(innings_id))
        .filter(overs::Column::Status.eq(Progress::InProgress))
        .order_by(overs::Column::OverNumber, Order::Desc)
        .one(conn)
        .await
}

/// Highest-numbered over of an innings, whatever its status.
pub async fn find_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Option<overs::Model>, sea_orm::DbErr> {
    overs::Entity::find()
        .filter(overs::Column::InningsId.eq(innings_id))
        .order_by(overs::Column::OverNumber, Order::Desc)
        .one(conn)
        .await
}

pub async fn create_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: OverCreate,
) -> Result<overs::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = overs::ActiveModel {
        id: NotSet,
        innings_id: Set(dto.innings_id),
        over_number: Set(dto.over_number),
        total_runs: Set(0),
        total_balls: Set(0),
        total_wickets: Set(0),
        status: Set(Progress::InProgress),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn update_totals<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: OverTotals,
) -> Result<overs::Model, sea_orm::DbErr> {
    let active = overs::ActiveModel {
        id: Set(dto.id),
        innings_id: NotSet,
        over_number: NotSet,
        total_runs: Set(dto.total_runs),
        total_balls: Set(dto.total_balls),
        total_wickets: Set(dto.total_wickets),
        status: Set(dto.status),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.update(conn).await
}

pub async fn delete_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = overs::Entity::delete_by_id(over_id).exec(conn).await?;
    Ok(result.rows_affected)
}
