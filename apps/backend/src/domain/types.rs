//! Closed domain enumerations for match, innings, over and ball state.
//!
//! Every value that arrives or is stored as a string is parsed into one of
//! these types at the boundary, so the rule engine only ever matches on
//! exhaustive variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// One of the two sides in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opposite(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the toss winner elected to do. Metadata only: the toss winner always
/// bats in innings 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

/// Shared by innings and overs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStatus {
    InProgress,
    Completed,
}

impl PlayStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, PlayStatus::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallType {
    Good,
    Wide,
    NoBall,
}

impl BallType {
    pub fn as_str(self) -> &'static str {
        match self {
            BallType::Good => "good",
            BallType::Wide => "wide",
            BallType::NoBall => "no_ball",
        }
    }
}

impl FromStr for BallType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(BallType::Good),
            "wide" => Ok(BallType::Wide),
            "no_ball" => Ok(BallType::NoBall),
            other => Err(DomainError::validation(
                ValidationKind::UnknownBallType,
                format!("unknown ball type: {other}"),
            )),
        }
    }
}

/// Outcome tag of a delivery: runs off the bat (0-6) or an extras tag.
///
/// Wire/storage form: `"0"`..`"6"`, `"WC"` (wicket, no runs), `"WD"` (wide),
/// `"NB"` (no-ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunType {
    Runs(u8),
    WicketCall,
    Wide,
    NoBall,
}

impl RunType {
    pub const MAX_RUNS: u8 = 6;

    pub fn as_string(self) -> String {
        match self {
            RunType::Runs(n) => n.to_string(),
            RunType::WicketCall => "WC".to_string(),
            RunType::Wide => "WD".to_string(),
            RunType::NoBall => "NB".to_string(),
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for RunType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WC" => Ok(RunType::WicketCall),
            "WD" => Ok(RunType::Wide),
            "NB" => Ok(RunType::NoBall),
            digits => match digits.parse::<u8>() {
                Ok(n) if n <= RunType::MAX_RUNS => Ok(RunType::Runs(n)),
                _ => Err(DomainError::validation(
                    ValidationKind::UnknownRunType,
                    format!("unknown run type: {s}"),
                )),
            },
        }
    }
}

impl Serialize for RunType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for RunType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WicketType {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    ObstructingTheField,
    RetiredOut,
}

impl WicketType {
    pub fn as_str(self) -> &'static str {
        match self {
            WicketType::Bowled => "bowled",
            WicketType::Caught => "caught",
            WicketType::Lbw => "lbw",
            WicketType::RunOut => "run_out",
            WicketType::Stumped => "stumped",
            WicketType::HitWicket => "hit_wicket",
            WicketType::ObstructingTheField => "obstructing_the_field",
            WicketType::RetiredOut => "retired_out",
        }
    }
}

impl FromStr for WicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bowled" => Ok(WicketType::Bowled),
            "caught" => Ok(WicketType::Caught),
            "lbw" => Ok(WicketType::Lbw),
            "run_out" => Ok(WicketType::RunOut),
            "stumped" => Ok(WicketType::Stumped),
            "hit_wicket" => Ok(WicketType::HitWicket),
            "obstructing_the_field" => Ok(WicketType::ObstructingTheField),
            "retired_out" => Ok(WicketType::RetiredOut),
            other => Err(DomainError::validation(
                ValidationKind::UnknownWicketType,
                format!("unknown wicket type: {other}"),
            )),
        }
    }
}
