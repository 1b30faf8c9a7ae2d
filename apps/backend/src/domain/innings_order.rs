//! Which innings a delivery may be written to, given the match state.

use crate::domain::ball_event::check_innings_number;
use crate::domain::completion::first_innings_complete;
use crate::domain::models::{Innings, Match};
use crate::errors::domain::{DomainError, RuleKind};

const FIRST_BATS_TOSS_WINNER: &str = "first innings must be played by the toss-winning team";
const SECOND_BATS_TOSS_LOSER: &str = "second innings must be played by the team that lost the toss";
const FIRST_ALREADY_COMPLETE: &str = "first innings is already complete";
const SECOND_BEFORE_FIRST: &str =
    "second innings cannot start before the first innings is complete";

/// Check a write to `innings_number` against the toss and the first innings.
///
/// `first` is innings 1 if it exists. Violations are reported, never corrected.
pub fn check_innings_order(
    m: &Match,
    first: Option<&Innings>,
    innings_number: u8,
) -> Result<(), DomainError> {
    check_innings_number(innings_number)?;

    let first_done = first.is_some_and(|f| first_innings_complete(f, m));
    if !first_done {
        if innings_number != 1 {
            return Err(DomainError::rule(RuleKind::InningsOrder, SECOND_BEFORE_FIRST));
        }
        if m.batting_team != Some(m.toss_winner) {
            return Err(DomainError::rule(RuleKind::BattingTeam, FIRST_BATS_TOSS_WINNER));
        }
        return Ok(());
    }

    if innings_number == 1 {
        return Err(DomainError::rule(RuleKind::InningsOrder, FIRST_ALREADY_COMPLETE));
    }
    if m.batting_team != Some(m.toss_winner.opposite()) {
        return Err(DomainError::rule(RuleKind::BattingTeam, SECOND_BATS_TOSS_LOSER));
    }
    Ok(())
}
