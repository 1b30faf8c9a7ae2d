//! Error codes for the live scoring backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the transport layer
//! forwards to clients.

use core::fmt;

/// Centralized error codes for the scoring core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Ball event validation
    /// Unknown ball, run or wicket type
    UnknownType,
    /// Byes below zero
    NegativeByes,
    /// Byes above what a single delivery can yield
    ExcessiveByes,
    /// Wicket flag and wicket type disagree
    WicketTypeMismatch,
    /// Run type not allowed for the ball type
    RunTypeMismatch,
    /// General validation error
    ValidationError,

    // Rule violations
    /// Innings number other than 1 or 2
    InvalidInningsNumber,
    /// Match is not live
    MatchNotLive,
    /// Scoring was already started for the match
    ScoringAlreadyStarted,
    /// Innings written out of order
    InningsOrder,
    /// Wrong team batting for the innings
    BattingTeam,
    /// Write to a completed innings
    InningsCompleted,
    /// Write to a completed over
    OverCompleted,
    /// Undo with no balls recorded
    NothingToUndo,
    /// Undo across the innings boundary
    UndoAcrossInnings,

    // Resource Not Found
    MatchNotFound,
    InningsNotFound,
    OverNotFound,
    BallNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Unique constraint violation
    UniqueViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Data corruption detected
    DataCorruption,
    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownType => "UNKNOWN_TYPE",
            Self::NegativeByes => "NEGATIVE_BYES",
            Self::ExcessiveByes => "EXCESSIVE_BYES",
            Self::WicketTypeMismatch => "WICKET_TYPE_MISMATCH",
            Self::RunTypeMismatch => "RUN_TYPE_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::InvalidInningsNumber => "INVALID_INNINGS_NUMBER",
            Self::MatchNotLive => "MATCH_NOT_LIVE",
            Self::ScoringAlreadyStarted => "SCORING_ALREADY_STARTED",
            Self::InningsOrder => "INNINGS_ORDER",
            Self::BattingTeam => "BATTING_TEAM",
            Self::InningsCompleted => "INNINGS_COMPLETED",
            Self::OverCompleted => "OVER_COMPLETED",
            Self::NothingToUndo => "NOTHING_TO_UNDO",
            Self::UndoAcrossInnings => "UNDO_ACROSS_INNINGS",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::InningsNotFound => "INNINGS_NOT_FOUND",
            Self::OverNotFound => "OVER_NOT_FOUND",
            Self::BallNotFound => "BALL_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
