use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, RuleKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;

/// Error returned by every scoring operation.
///
/// The transport layer maps `code()` to its own status vocabulary; the core
/// never decides how an error is rendered.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Rule violation: {detail}")]
    RuleViolation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::RuleViolation { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Db { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::RuleViolation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Db { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn is_rule_violation(&self) -> bool {
        matches!(self, AppError::RuleViolation { .. })
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn rule(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::RuleViolation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Db {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::UnknownBallType
                    | ValidationKind::UnknownRunType
                    | ValidationKind::UnknownWicketType => ErrorCode::UnknownType,
                    ValidationKind::NegativeByes => ErrorCode::NegativeByes,
                    ValidationKind::ExcessiveByes => ErrorCode::ExcessiveByes,
                    ValidationKind::MissingWicketType | ValidationKind::UnexpectedWicketType => {
                        ErrorCode::WicketTypeMismatch
                    }
                    ValidationKind::RunTypeMismatch => ErrorCode::RunTypeMismatch,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Rule(kind, detail) => {
                let code = match kind {
                    RuleKind::InvalidInningsNumber => ErrorCode::InvalidInningsNumber,
                    RuleKind::MatchNotLive => ErrorCode::MatchNotLive,
                    RuleKind::ScoringAlreadyStarted => ErrorCode::ScoringAlreadyStarted,
                    RuleKind::InningsOrder => ErrorCode::InningsOrder,
                    RuleKind::BattingTeam => ErrorCode::BattingTeam,
                    RuleKind::InningsCompleted => ErrorCode::InningsCompleted,
                    RuleKind::OverCompleted => ErrorCode::OverCompleted,
                    RuleKind::NothingToUndo => ErrorCode::NothingToUndo,
                    RuleKind::UndoAcrossInnings => ErrorCode::UndoAcrossInnings,
                };
                AppError::rule(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Match => ErrorCode::MatchNotFound,
                    NotFoundKind::Innings => ErrorCode::InningsNotFound,
                    NotFoundKind::Over => ErrorCode::OverNotFound,
                    NotFoundKind::Ball => ErrorCode::BallNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::OptimisticLock => ErrorCode::OptimisticLock,
                    ConflictKind::DuplicateInnings
                    | ConflictKind::DuplicateOver
                    | ConflictKind::DuplicateBall => ErrorCode::UniqueViolation,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                    InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                    InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                    InfraErrorKind::Other(_) => ErrorCode::DbError,
                };
                AppError::db(code, detail)
            }
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(map_db_err(e))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
