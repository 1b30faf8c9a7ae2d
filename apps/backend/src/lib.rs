#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod realtime;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use config::db::{db_url, DbKind, DbProfile};
pub use db::txn::with_txn;
pub use domain::{BallEvent, Scorecard};
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use realtime::{Broadcaster, MatchHub, ScoreEvent};
pub use services::{LiveScoring, RealtimeScoring, ScoringEngine};
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::db::*;
    pub use super::domain::types::*;
    pub use super::domain::{BallEvent, Scorecard};
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::services::*;
    pub use super::state::app_state::AppState;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
