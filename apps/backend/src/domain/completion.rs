//! Innings and match completion rules, plus the final result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::models::{Innings, Match};
use crate::domain::rules;
use crate::domain::types::Team;

/// Outcome of evaluating the chase after a second-innings delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCheck {
    pub complete: bool,
    pub reason: String,
}

impl CompletionCheck {
    fn done(reason: String) -> Self {
        Self {
            complete: true,
            reason,
        }
    }

    fn continues() -> Self {
        Self {
            complete: false,
            reason: "match continues".to_string(),
        }
    }
}

/// First innings ends at ten wickets or when the allotted overs are bowled.
pub fn first_innings_complete(innings: &Innings, m: &Match) -> bool {
    innings.status.is_completed()
        || rules::first_innings_is_complete(innings.total_wickets, innings.total_overs, m.total_overs)
}

/// Decide whether the second innings (and so the match) is over.
///
/// Precedence: target, then wickets, then overs. The wicket limit comes from
/// team A's squad regardless of which side is chasing.
pub fn should_complete_match(first: &Innings, second: &Innings, m: &Match) -> CompletionCheck {
    let target = rules::target(first.total_runs);
    let max_wickets = rules::max_wickets(m.team_a_player_count);

    if second.total_runs >= target {
        return CompletionCheck::done(format!(
            "target reached: {}/{}",
            second.total_runs, target
        ));
    }
    if second.total_wickets >= max_wickets {
        return CompletionCheck::done(format!(
            "all wickets lost: {}/{}",
            second.total_wickets, max_wickets
        ));
    }
    if second.total_overs >= f64::from(m.total_overs) {
        return CompletionCheck::done(format!(
            "all overs completed: {:.1}/{}",
            second.total_overs, m.total_overs
        ));
    }
    CompletionCheck::continues()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Margin {
    Runs(u32),
    Wickets(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchResult {
    Tie,
    Won { winner: Team, margin: Margin },
}

impl MatchResult {
    /// Result of a finished chase.
    pub fn decide(first: &Innings, second: &Innings, m: &Match) -> Self {
        if second.total_runs == first.total_runs {
            return MatchResult::Tie;
        }
        if second.total_runs >= rules::target(first.total_runs) {
            let wickets_left =
                rules::max_wickets(m.team_a_player_count).saturating_sub(second.total_wickets);
            return MatchResult::Won {
                winner: second.batting_team,
                margin: Margin::Wickets(wickets_left),
            };
        }
        MatchResult::Won {
            winner: first.batting_team,
            margin: Margin::Runs(first.total_runs - second.total_runs),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Tie => f.write_str("match tied"),
            MatchResult::Won { winner, margin } => {
                let (n, unit) = match margin {
                    Margin::Runs(n) => (n, "run"),
                    Margin::Wickets(n) => (n, "wicket"),
                };
                let plural = if *n == 1 { "" } else { "s" };
                write!(f, "team {winner} won by {n} {unit}{plural}")
            }
        }
    }
}
