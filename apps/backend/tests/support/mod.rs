#![allow(dead_code)]

pub mod ball_feed;
pub mod match_setup;
pub mod test_state;

pub use ball_feed::{feed_dots, feed_runs};
pub use match_setup::{create_live_match, create_match_with, started_match};
pub use test_state::build_test_state;
