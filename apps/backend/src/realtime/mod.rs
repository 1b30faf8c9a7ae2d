//! Real-time fan-out: the broadcast contract and an in-process hub.

pub mod broadcast;
pub mod hub;
pub mod protocol;

pub use broadcast::{Broadcaster, ScoreEvent};
pub use hub::{MatchHub, Subscription};
pub use protocol::ServerMsg;
