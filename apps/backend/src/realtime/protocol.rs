use serde::{Deserialize, Serialize};

use super::broadcast::ScoreEvent;

pub const PROTOCOL_VERSION: i32 = 1;

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    Subscribed {
        protocol: i32,
        match_id: i64,
    },

    Score {
        match_id: i64,
        version: i32,
        event: ScoreEvent,
    },
}
