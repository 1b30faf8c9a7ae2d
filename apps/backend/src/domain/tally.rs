//! Aggregate derivation for overs and innings.
//!
//! Totals are always recomputed from the full set of children, so adding and
//! undoing a ball go through the same arithmetic. Sums are checked: a total
//! that no longer fits is stored data gone wrong, never a wrapped score.

use crate::domain::models::{Ball, Over};
use crate::domain::rules;
use crate::domain::types::{BallType, PlayStatus};
use crate::errors::domain::DomainError;

fn add(total: u32, amount: u32, what: &str) -> Result<u32, DomainError> {
    total
        .checked_add(amount)
        .ok_or_else(|| DomainError::corrupt(format!("{what} overflowed adding {amount} to {total}")))
}

/// Running totals of one over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverTally {
    pub runs: u32,
    pub legal_balls: u32,
    pub wickets: u32,
}

impl OverTally {
    pub fn from_balls<'a, I>(balls: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a Ball>,
    {
        let mut tally = Self::default();
        for ball in balls {
            let contributed = add(ball.runs, ball.byes, "ball runs")?;
            tally.record(ball.ball_type, contributed, ball.is_wicket)?;
        }
        Ok(tally)
    }

    pub fn from_over(over: &Over) -> Self {
        Self {
            runs: over.total_runs,
            legal_balls: over.total_balls,
            wickets: over.total_wickets,
        }
    }

    /// Adds one delivery. On error the tally is left unchanged.
    pub fn record(
        &mut self,
        ball_type: BallType,
        contributed_runs: u32,
        is_wicket: bool,
    ) -> Result<(), DomainError> {
        let runs = add(self.runs, contributed_runs, "over runs")?;
        let legal_balls = add(
            self.legal_balls,
            u32::from(rules::is_legal_delivery(ball_type)),
            "over balls",
        )?;
        let wickets = add(self.wickets, u32::from(is_wicket), "over wickets")?;
        *self = Self {
            runs,
            legal_balls,
            wickets,
        };
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        rules::over_is_complete(self.legal_balls, self.wickets)
    }

    pub fn status(&self) -> PlayStatus {
        if self.is_complete() {
            PlayStatus::Completed
        } else {
            PlayStatus::InProgress
        }
    }
}

/// Totals of one innings, derived from its overs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InningsTally {
    pub runs: u32,
    pub wickets: u32,
    pub legal_balls: u32,
    pub overs: f64,
}

impl InningsTally {
    pub fn from_overs<'a, I>(overs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a Over>,
    {
        let mut runs = 0;
        let mut wickets = 0;
        let mut legal_balls = 0;
        let mut full_overs = 0;
        let mut partial_balls = 0;
        for over in overs {
            runs = add(runs, over.total_runs, "innings runs")?;
            wickets = add(wickets, over.total_wickets, "innings wickets")?;
            legal_balls = add(legal_balls, over.total_balls, "innings balls")?;
            if over.total_balls >= rules::BALLS_PER_OVER {
                full_overs = add(full_overs, 1, "innings overs")?;
            } else {
                partial_balls = add(partial_balls, over.total_balls, "innings balls")?;
            }
        }
        Ok(Self {
            runs,
            wickets,
            legal_balls,
            overs: rules::decimal_overs(full_overs, partial_balls),
        })
    }
}
