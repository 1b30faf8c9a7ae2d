//! Ball event input and its validation.
//!
//! `BallEvent` is the wire-level request; `ValidatedBall` is what the
//! recorder persists. Validation runs before any state is read or written.

use serde::{Deserialize, Serialize};

use crate::domain::rules;
use crate::domain::types::{BallType, RunType, WicketType};
use crate::errors::domain::{DomainError, RuleKind, ValidationKind};

/// One delivery as submitted by a scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    pub match_id: i64,
    pub innings_number: u8,
    pub ball_type: BallType,
    pub run_type: RunType,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default)]
    pub wicket_type: Option<WicketType>,
    #[serde(default)]
    pub byes: i32,
}

impl BallEvent {
    /// A good ball scoring `runs` off the bat.
    pub fn good(match_id: i64, innings_number: u8, runs: u8) -> Self {
        Self {
            match_id,
            innings_number,
            ball_type: BallType::Good,
            run_type: RunType::Runs(runs),
            is_wicket: false,
            wicket_type: None,
            byes: 0,
        }
    }

    pub fn wide(match_id: i64, innings_number: u8) -> Self {
        Self {
            ball_type: BallType::Wide,
            run_type: RunType::Wide,
            ..Self::good(match_id, innings_number, 0)
        }
    }

    pub fn no_ball(match_id: i64, innings_number: u8) -> Self {
        Self {
            ball_type: BallType::NoBall,
            run_type: RunType::NoBall,
            ..Self::good(match_id, innings_number, 0)
        }
    }

    /// A legal delivery that takes a wicket and scores nothing.
    pub fn wicket(match_id: i64, innings_number: u8, wicket_type: WicketType) -> Self {
        Self {
            run_type: RunType::WicketCall,
            is_wicket: true,
            wicket_type: Some(wicket_type),
            ..Self::good(match_id, innings_number, 0)
        }
    }

    pub fn with_byes(mut self, byes: i32) -> Self {
        self.byes = byes;
        self
    }
}

/// A ball event that passed validation, with its derived run value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedBall {
    pub innings_number: u8,
    pub ball_type: BallType,
    pub run_type: RunType,
    pub runs: u32,
    pub byes: u32,
    pub is_wicket: bool,
    pub wicket_type: Option<WicketType>,
}

impl ValidatedBall {
    /// Runs this delivery adds to its over and innings.
    pub fn contributed_runs(&self) -> u32 {
        self.runs + self.byes
    }

    pub fn is_legal(&self) -> bool {
        rules::is_legal_delivery(self.ball_type)
    }
}

/// Innings numbers outside `1..=2` are rule violations, not malformed input.
pub fn check_innings_number(innings_number: u8) -> Result<(), DomainError> {
    if matches!(innings_number, 1 | 2) {
        Ok(())
    } else {
        Err(DomainError::rule(
            RuleKind::InvalidInningsNumber,
            format!("invalid innings number: {innings_number} (expected 1 or 2)"),
        ))
    }
}

pub fn validate_ball_event(event: &BallEvent) -> Result<ValidatedBall, DomainError> {
    check_innings_number(event.innings_number)?;

    let byes = u32::try_from(event.byes).map_err(|_| {
        DomainError::validation(
            ValidationKind::NegativeByes,
            format!("byes must be zero or more, got {}", event.byes),
        )
    })?;
    if byes > rules::MAX_BYES_PER_BALL {
        return Err(DomainError::validation(
            ValidationKind::ExcessiveByes,
            format!(
                "byes must be at most {} per delivery, got {byes}",
                rules::MAX_BYES_PER_BALL
            ),
        ));
    }

    match (event.is_wicket, event.wicket_type) {
        (true, None) => {
            return Err(DomainError::validation(
                ValidationKind::MissingWicketType,
                "wicket_type is required when is_wicket is set",
            ))
        }
        (false, Some(wt)) => {
            return Err(DomainError::validation(
                ValidationKind::UnexpectedWicketType,
                format!("wicket_type {} given for a delivery that is not a wicket", wt.as_str()),
            ))
        }
        _ => {}
    }

    check_run_type_combination(event.ball_type, event.run_type, event.is_wicket)?;

    Ok(ValidatedBall {
        innings_number: event.innings_number,
        ball_type: event.ball_type,
        run_type: event.run_type,
        runs: rules::run_value(event.run_type),
        byes,
        is_wicket: event.is_wicket,
        wicket_type: event.wicket_type,
    })
}

fn check_run_type_combination(
    ball_type: BallType,
    run_type: RunType,
    is_wicket: bool,
) -> Result<(), DomainError> {
    let mismatch = |detail: String| {
        Err(DomainError::validation(
            ValidationKind::RunTypeMismatch,
            detail,
        ))
    };

    match (ball_type, run_type) {
        (_, RunType::WicketCall) if !is_wicket => {
            mismatch("run type WC requires is_wicket".to_string())
        }
        (BallType::Good, RunType::Runs(_) | RunType::WicketCall) => Ok(()),
        (BallType::Good, other) => mismatch(format!(
            "run type {other} is only valid on an illegal delivery"
        )),
        (BallType::Wide, RunType::Wide) => Ok(()),
        (BallType::Wide, other) => mismatch(format!(
            "wide deliveries must use run type WD (runs taken are byes), got {other}"
        )),
        (BallType::NoBall, RunType::NoBall | RunType::Runs(_)) => Ok(()),
        (BallType::NoBall, other) => mismatch(format!(
            "no-ball deliveries must use run type NB or runs off the bat, got {other}"
        )),
    }
}
