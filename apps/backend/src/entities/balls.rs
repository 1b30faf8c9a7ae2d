use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Delivery {
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "wide")]
    Wide,
    #[sea_orm(string_value = "no_ball")]
    NoBall,
}

/// `run_type` and `wicket_type` are plain strings here; the repository parses
/// them into domain enums and treats unknown values as corruption.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "balls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub over_id: i64,
    pub ball_number: i32,
    pub ball_type: Delivery,
    pub run_type: String,
    pub runs: i32,
    pub byes: i32,
    pub is_wicket: bool,
    pub wicket_type: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::overs::Entity",
        from = "Column::OverId",
        to = "super::overs::Column::Id"
    )]
    Over,
}

impl Related<super::overs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Over.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
