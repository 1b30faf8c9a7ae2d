use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::completion::MatchResult;
use crate::domain::scorecard::{BallCard, InningsCard, OverCard, Scorecard};
use crate::domain::types::WicketType;
use crate::error::AppError;

/// One notification about a scoring mutation, carrying the post-mutation snapshot.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScoreEvent {
    BallAdded {
        innings_number: u8,
        over_number: u32,
        ball: BallCard,
    },
    ScoreUpdated {
        scorecard: Scorecard,
    },
    WicketUpdated {
        innings_number: u8,
        total_wickets: u32,
        wicket_type: Option<WicketType>,
    },
    OverCompleted {
        innings_number: u8,
        over: OverCard,
    },
    InningsStarted {
        innings: InningsCard,
    },
    MatchStarted {
        scorecard: Scorecard,
    },
    MatchEnded {
        reason: String,
        result: Option<MatchResult>,
        scorecard: Scorecard,
    },
    BallUndone {
        innings_number: u8,
        over_number: u32,
        ball_number: u32,
    },
    Custom {
        name: String,
        payload: serde_json::Value,
    },
}

impl ScoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreEvent::BallAdded { .. } => "ball_added",
            ScoreEvent::ScoreUpdated { .. } => "score_updated",
            ScoreEvent::WicketUpdated { .. } => "wicket_updated",
            ScoreEvent::OverCompleted { .. } => "over_completed",
            ScoreEvent::InningsStarted { .. } => "innings_started",
            ScoreEvent::MatchStarted { .. } => "match_started",
            ScoreEvent::MatchEnded { .. } => "match_ended",
            ScoreEvent::BallUndone { .. } => "ball_undone",
            ScoreEvent::Custom { .. } => "custom",
        }
    }
}

/// Publish contract the transport layer implements.
///
/// `version` is the match `lock_version` the event was produced at.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    async fn publish(&self, match_id: i64, version: i32, event: ScoreEvent)
        -> Result<(), AppError>;
}
