pub mod engine;
pub mod match_locks;
pub mod realtime;
pub mod scoring;

pub use engine::{LiveScoring, ScoringEngine};
pub use match_locks::MatchLocks;
pub use realtime::{BroadcastDispatcher, DeliveryReceipt, RealtimeScoring};
pub use scoring::{BallOutcome, ScoringService, StartOutcome, UndoOutcome};
