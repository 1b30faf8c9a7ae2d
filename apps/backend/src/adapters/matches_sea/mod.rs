//! SeaORM adapter for the match repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    Set,
};

use crate::entities::matches;

pub mod dto;

pub use dto::{MatchCreate, MatchUpdateScoring};

fn match_not_found(match_id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("MATCH_NOT_FOUND:{match_id}"))
}

/// Apply an update guarded by `lock_version`, bump the version, then refetch.
///
/// Zero affected rows means either a missing match or a stale version; the
/// two are told apart with a second read.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
    configure_update: F,
) -> Result<matches::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<matches::Entity>) -> sea_orm::UpdateMany<matches::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(matches::Entity::update_many())
        .col_expr(matches::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            matches::Column::LockVersion,
            Expr::col(matches::Column::LockVersion).add(1),
        )
        .filter(matches::Column::Id.eq(id))
        .filter(matches::Column::LockVersion.eq(current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match matches::Entity::find_by_id(id).one(conn).await? {
            Some(current) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                current_lock_version, current.lock_version
            ))),
            None => Err(match_not_found(id)),
        };
    }

    require_match(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id).one(conn).await
}

/// Find a match by id or fail with a structured `MATCH_NOT_FOUND` error.
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    find_by_id(conn, match_id)
        .await?
        .ok_or_else(|| match_not_found(match_id))
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = matches::ActiveModel {
        id: NotSet,
        team_a_name: Set(dto.team_a_name),
        team_b_name: Set(dto.team_b_name),
        team_a_player_count: Set(dto.team_a_player_count),
        team_b_player_count: Set(dto.team_b_player_count),
        total_overs: Set(dto.total_overs),
        toss_winner: Set(dto.toss_winner),
        toss_decision: Set(dto.toss_decision),
        batting_team: Set(None),
        status: Set(dto.status),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn update_scoring<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchUpdateScoring,
) -> Result<matches::Model, sea_orm::DbErr> {
    optimistic_update_then_fetch(conn, dto.id, dto.current_lock_version, |mut update| {
        if let Some(status) = dto.status {
            update = update.col_expr(matches::Column::Status, Expr::val(status.to_value()).into());
        }
        if let Some(team) = dto.batting_team {
            update = update.col_expr(
                matches::Column::BattingTeam,
                Expr::val(Some(team.to_value())).into(),
            );
        }
        update
    })
    .await
}
