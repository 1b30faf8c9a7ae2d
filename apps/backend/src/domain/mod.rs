//! Domain layer: pure cricket scoring types, rules and read models.

pub mod ball_event;
pub mod completion;
pub mod innings_order;
pub mod models;
pub mod rules;
pub mod scorecard;
pub mod tally;
pub mod types;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_completion;
#[cfg(test)]
mod tests_props_overs;
#[cfg(test)]
mod tests_scorecard;

// Re-exports for ergonomics
pub use ball_event::{validate_ball_event, BallEvent, ValidatedBall};
pub use completion::{CompletionCheck, Margin, MatchResult};
pub use models::{Ball, Innings, Match, Over};
pub use scorecard::{build_scorecard, InningsCard, OverCard, Scorecard};
pub use types::{BallType, MatchStatus, PlayStatus, RunType, Team, TossDecision, WicketType};
