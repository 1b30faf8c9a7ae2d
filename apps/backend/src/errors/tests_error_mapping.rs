// Unit tests for error mapping - pure domain logic without database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, RuleKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds() {
    let app: AppError = DomainError::validation(ValidationKind::NegativeByes, "byes -1").into();
    assert_eq!(app.code(), ErrorCode::NegativeByes);
    assert!(matches!(app, AppError::Validation { .. }));

    let app: AppError =
        DomainError::validation(ValidationKind::UnknownRunType, "unknown run type: 9").into();
    assert_eq!(app.code(), ErrorCode::UnknownType);

    let app: AppError = DomainError::validation_other("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_rule_violations_and_keeps_detail() {
    let de = DomainError::rule(
        RuleKind::BattingTeam,
        "first innings must be played by the toss-winning team",
    );
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::BattingTeam);
    assert!(app.is_rule_violation());
    assert_eq!(
        app.to_string(),
        "Rule violation: first innings must be played by the toss-winning team"
    );
}

#[test]
fn maps_conflicts() {
    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");

    let dup = DomainError::conflict(ConflictKind::DuplicateBall, "ball exists");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "UNIQUE_VIOLATION");

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Match, "match 9").into();
    assert_eq!(app.code().as_str(), "MATCH_NOT_FOUND");
    assert_eq!(app.detail(), "match 9");

    let app: AppError = DomainError::not_found(NotFoundKind::Innings, "innings 2").into();
    assert_eq!(app.code(), ErrorCode::InningsNotFound);
}

#[test]
fn maps_infra() {
    let t: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(t.code(), ErrorCode::DbTimeout);

    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(down.code(), ErrorCode::DbUnavailable);

    let corrupt: AppError = DomainError::corrupt("bad run type in row").into();
    assert_eq!(corrupt.code(), ErrorCode::DataCorruption);
}

#[test]
fn maps_db_record_not_found() {
    let app: AppError = sea_orm::DbErr::RecordNotFound("Match not found".into()).into();
    assert!(matches!(app, AppError::NotFound { .. }));
}
