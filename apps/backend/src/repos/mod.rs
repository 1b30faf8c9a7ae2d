//! Repository functions for the domain layer.
//!
//! Each function is generic over `ConnectionTrait`, takes and returns domain
//! types, and reports failures as `DomainError`.

pub mod balls;
pub mod innings;
pub mod matches;
pub mod overs;

use crate::errors::domain::DomainError;

/// Stored counters are non-negative by construction; anything else is corruption.
pub(crate) fn stored_count(field: &str, value: i32) -> Result<u32, DomainError> {
    u32::try_from(value)
        .map_err(|_| DomainError::corrupt(format!("negative {field} in storage: {value}")))
}

pub(crate) fn to_column(field: &str, value: u32) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| {
        DomainError::validation_other(format!("{field} out of range: {value}"))
    })
}
