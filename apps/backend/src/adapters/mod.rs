//! SeaORM adapters. Functions here return `sea_orm::DbErr`; repositories
//! translate to `DomainError` and to domain models.

pub mod balls_sea;
pub mod innings_sea;
pub mod matches_sea;
pub mod overs_sea;
