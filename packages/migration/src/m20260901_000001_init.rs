use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Matches {
    Table,
    Id,
    TeamAName,
    TeamBName,
    TeamAPlayerCount,
    TeamBPlayerCount,
    TotalOvers,
    TossWinner,
    TossDecision,
    BattingTeam,
    Status,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Innings {
    Table,
    Id,
    MatchId,
    InningsNumber,
    BattingTeam,
    TotalRuns,
    TotalWickets,
    TotalOvers,
    TotalBalls,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Overs {
    Table,
    Id,
    InningsId,
    OverNumber,
    TotalRuns,
    TotalBalls,
    TotalWickets,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Balls {
    Table,
    Id,
    OverId,
    BallNumber,
    BallType,
    RunType,
    Runs,
    Byes,
    IsWicket,
    WicketType,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enumerations are stored as short strings on every backend so the
        // same schema runs on PostgreSQL and SQLite.

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Matches::TeamAName).string().not_null())
                    .col(ColumnDef::new(Matches::TeamBName).string().not_null())
                    .col(
                        ColumnDef::new(Matches::TeamAPlayerCount)
                            .integer()
                            .not_null()
                            .default(11),
                    )
                    .col(
                        ColumnDef::new(Matches::TeamBPlayerCount)
                            .integer()
                            .not_null()
                            .default(11),
                    )
                    .col(ColumnDef::new(Matches::TotalOvers).integer().not_null())
                    .col(ColumnDef::new(Matches::TossWinner).string_len(8).not_null())
                    .col(
                        ColumnDef::new(Matches::TossDecision)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Matches::BattingTeam).string_len(8).null())
                    .col(ColumnDef::new(Matches::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Matches::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // innings
        manager
            .create_table(
                Table::create()
                    .table(Innings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Innings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Innings::MatchId).big_integer().not_null())
                    .col(ColumnDef::new(Innings::InningsNumber).integer().not_null())
                    .col(ColumnDef::new(Innings::BattingTeam).string_len(8).not_null())
                    .col(
                        ColumnDef::new(Innings::TotalRuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Innings::TotalWickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Innings::TotalOvers)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Innings::TotalBalls)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Innings::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Innings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Innings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_innings_match_id")
                            .from(Innings::Table, Innings::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_innings_match_number")
                    .table(Innings::Table)
                    .col(Innings::MatchId)
                    .col(Innings::InningsNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // overs
        manager
            .create_table(
                Table::create()
                    .table(Overs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Overs::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Overs::InningsId).big_integer().not_null())
                    .col(ColumnDef::new(Overs::OverNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Overs::TotalRuns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Overs::TotalBalls)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Overs::TotalWickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Overs::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Overs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Overs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_overs_innings_id")
                            .from(Overs::Table, Overs::InningsId)
                            .to(Innings::Table, Innings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_overs_innings_number")
                    .table(Overs::Table)
                    .col(Overs::InningsId)
                    .col(Overs::OverNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // balls
        manager
            .create_table(
                Table::create()
                    .table(Balls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Balls::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Balls::OverId).big_integer().not_null())
                    .col(ColumnDef::new(Balls::BallNumber).integer().not_null())
                    .col(ColumnDef::new(Balls::BallType).string_len(16).not_null())
                    .col(ColumnDef::new(Balls::RunType).string_len(4).not_null())
                    .col(
                        ColumnDef::new(Balls::Runs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Balls::Byes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Balls::IsWicket)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Balls::WicketType).string_len(32).null())
                    .col(
                        ColumnDef::new(Balls::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balls_over_id")
                            .from(Balls::Table, Balls::OverId)
                            .to(Overs::Table, Overs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_balls_over_number")
                    .table(Balls::Table)
                    .col(Balls::OverId)
                    .col(Balls::BallNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ux_balls_over_number")
                    .table(Balls::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Balls::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_overs_innings_number")
                    .table(Overs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Overs::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_innings_match_number")
                    .table(Innings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Innings::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
