//! DTOs for balls_sea adapter.

use crate::entities::balls::Delivery;

#[derive(Debug, Clone)]
pub struct BallCreate {
    pub over_id: i64,
    pub ball_number: i32,
    pub ball_type: Delivery,
    pub run_type: String,
    pub runs: i32,
    pub byes: i32,
    pub is_wicket: bool,
    pub wicket_type: Option<String>,
}
