//! Scoring service - bridges the pure cricket rules with DB persistence.
//!
//! Every method takes the caller's transaction; the engine owns the unit of
//! work and the per-match lock.

mod ball_recorder;
mod completion;
mod innings_manager;
mod over_manager;
mod scorecard;
mod undo;

use serde::Serialize;

use crate::domain::models::{Ball, Innings, Over};
use crate::domain::scorecard::Scorecard;

pub use scorecard::load_scorecard;

/// Scoring service - stateless, generic over the caller's transaction.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoringService;

/// Result of `start_scoring`.
#[derive(Debug, Clone, Serialize)]
pub struct StartOutcome {
    pub innings: Innings,
    pub scorecard: Scorecard,
}

/// Result of recording one delivery.
#[derive(Debug, Clone, Serialize)]
pub struct BallOutcome {
    pub ball: Ball,
    /// The over the ball landed in, after the write.
    pub over: Over,
    /// The innings the ball belongs to, after the write.
    pub innings: Innings,
    pub over_completed: bool,
    pub innings_completed: bool,
    pub match_completed: bool,
    /// Set whenever completion was evaluated.
    pub completion_reason: Option<String>,
    /// Innings 2, when this ball closed innings 1.
    pub started_innings: Option<Innings>,
    pub scorecard: Scorecard,
}

/// Result of undoing the most recent delivery.
#[derive(Debug, Clone, Serialize)]
pub struct UndoOutcome {
    pub removed: Ball,
    pub innings_number: u8,
    pub over_number: u32,
    /// The over held no other balls and was deleted.
    pub over_removed: bool,
    pub over_reopened: bool,
    pub innings_reopened: bool,
    pub match_reopened: bool,
    pub scorecard: Scorecard,
}
