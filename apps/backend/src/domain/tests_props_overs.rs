//! Property tests for over and innings aggregation (pure domain, no DB).
//!
//! Properties tested:
//! - Good balls only: runs sum, ball count matches, complete iff six balls
//! - Illegal deliveries never advance the legal-ball count
//! - Decimal overs render partial overs as tenths and six balls as a whole over
//! - Removing the last ball restores the previous aggregates

use proptest::prelude::*;

use crate::domain::fixtures::{good, no_ball, over_from, wide};
use crate::domain::models::Ball;
use crate::domain::rules::{decimal_overs, BALLS_PER_OVER};
use crate::domain::tally::{InningsTally, OverTally};
use crate::domain::test_prelude;
use crate::domain::types::PlayStatus;

fn delivery() -> impl Strategy<Value = (u8, u8)> {
    // (kind, runs): kind 0 = good, 1 = wide, 2 = no-ball
    (0u8..3, 0u8..=6)
}

fn to_balls(deliveries: &[(u8, u8)]) -> Vec<Ball> {
    deliveries
        .iter()
        .enumerate()
        .map(|(i, (kind, runs))| {
            let n = i as u32 + 1;
            match kind {
                0 => good(n, *runs),
                1 => wide(n, 0),
                _ => no_ball(n),
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: good balls only
    #[test]
    fn prop_good_balls_sum_and_complete(runs in prop::collection::vec(0u8..=6, 0..=6)) {
        let balls: Vec<Ball> = runs
            .iter()
            .enumerate()
            .map(|(i, r)| good(i as u32 + 1, *r))
            .collect();
        let over = over_from(1, &balls);

        let expected: u32 = runs.iter().map(|r| u32::from(*r)).sum();
        prop_assert_eq!(over.total_runs, expected);
        prop_assert_eq!(over.total_balls, runs.len() as u32);
        prop_assert_eq!(over.status == PlayStatus::Completed, runs.len() == 6);
    }

    /// Property: illegal deliveries never advance total_balls
    #[test]
    fn prop_illegal_deliveries_do_not_count(deliveries in prop::collection::vec(delivery(), 0..20)) {
        let legal = deliveries.iter().filter(|(k, _)| *k == 0).count() as u32;
        let tally = OverTally::from_balls(&to_balls(&deliveries)).unwrap();

        prop_assert_eq!(tally.legal_balls, legal);
        prop_assert_eq!(tally.is_complete(), legal >= BALLS_PER_OVER);
    }

    /// Property: decimal overs
    #[test]
    fn prop_decimal_overs(completed in 0u32..50, balls in 0u32..=6) {
        let overs = decimal_overs(completed, balls);
        if balls == 6 {
            prop_assert_eq!(overs, f64::from(completed + 1));
        } else {
            prop_assert_eq!(overs.floor() as u32, completed);
            prop_assert_eq!((overs * 10.0).round() as u32, completed * 10 + balls);
        }
    }

    /// Property: dropping the last ball gives the same tally as never adding it
    #[test]
    fn prop_remove_last_restores(deliveries in prop::collection::vec(delivery(), 1..12)) {
        let balls = to_balls(&deliveries);
        let before = OverTally::from_balls(&balls[..balls.len() - 1]).unwrap();

        let mut after = before;
        let last = &balls[balls.len() - 1];
        after.record(last.ball_type, last.contributed_runs(), last.is_wicket).unwrap();
        prop_assert_eq!(after, OverTally::from_balls(&balls).unwrap());

        let restored = OverTally::from_balls(balls.iter().take(balls.len() - 1)).unwrap();
        prop_assert_eq!(restored, before);
    }

    /// Property: innings totals equal the sum of their overs
    #[test]
    fn prop_innings_sums_overs(over_runs in prop::collection::vec(prop::collection::vec(0u8..=6, 6), 0..5), tail in prop::collection::vec(0u8..=6, 0..6)) {
        let mut overs = Vec::new();
        for (i, runs) in over_runs.iter().enumerate() {
            let balls: Vec<Ball> = runs.iter().enumerate().map(|(j, r)| good(j as u32 + 1, *r)).collect();
            overs.push(over_from(i as u32 + 1, &balls));
        }
        let tail_balls: Vec<Ball> = tail.iter().enumerate().map(|(j, r)| good(j as u32 + 1, *r)).collect();
        overs.push(over_from(over_runs.len() as u32 + 1, &tail_balls));

        let tally = InningsTally::from_overs(&overs).unwrap();
        let expected_runs: u32 = over_runs.iter().flatten().chain(tail.iter()).map(|r| u32::from(*r)).sum();
        prop_assert_eq!(tally.runs, expected_runs);
        prop_assert_eq!(tally.overs, decimal_overs(over_runs.len() as u32, tail.len() as u32));
    }
}
