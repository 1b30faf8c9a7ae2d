//! Ball recording: over and innings aggregates, illegal deliveries, roll-over
//! and validation.
//!
//! Run:
//!   cargo test --test add_ball_tests

mod common;
mod support;

use common::assert_detail_contains;
use scoring_backend::adapters::overs_sea::{self, OverTotals};
use scoring_backend::domain::types::{BallType, MatchStatus, PlayStatus, RunType, WicketType};
use scoring_backend::domain::BallEvent;
use scoring_backend::entities::overs::Progress;
use scoring_backend::repos::{innings, overs};
use scoring_backend::{AppError, ErrorCode, LiveScoring};
use support::{build_test_state, create_match_with, feed_dots, feed_runs, started_match};

#[tokio::test]
async fn good_balls_sum_into_over_and_innings() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let outcomes = feed_runs(&scoring, m.id, 1, &[1, 4, 0, 6, 2]).await?;
    let last = outcomes.last().expect("five outcomes");

    assert_eq!(last.over.over_number, 1);
    assert_eq!(last.over.total_runs, 13);
    assert_eq!(last.over.total_balls, 5);
    assert_eq!(last.over.status, PlayStatus::InProgress);
    assert!(!last.over_completed);

    assert_eq!(last.innings.total_runs, 13);
    assert_eq!(last.innings.total_balls, 5);
    assert_eq!(last.innings.total_overs, 0.5);

    let numbers: Vec<u32> = outcomes.iter().map(|o| o.ball.ball_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn sixth_legal_ball_completes_the_over() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let outcomes = feed_dots(&scoring, m.id, 1, 6).await?;
    let sixth = &outcomes[5];
    assert!(sixth.over_completed);
    assert_eq!(sixth.over.status, PlayStatus::Completed);
    assert_eq!(sixth.innings.total_overs, 1.0);
    assert!(sixth.scorecard.current_over.is_none());
    Ok(())
}

#[tokio::test]
async fn illegal_deliveries_take_a_slot_but_not_a_ball() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    feed_dots(&scoring, m.id, 1, 2).await?;
    let wide = scoring.add_ball(BallEvent::wide(m.id, 1).with_byes(2)).await?;
    assert_eq!(wide.ball.ball_number, 3);
    assert_eq!(wide.ball.runs, 1);
    assert_eq!(wide.over.total_balls, 2);
    assert_eq!(wide.over.total_runs, 3);

    let no_ball = scoring.add_ball(BallEvent::no_ball(m.id, 1)).await?;
    assert_eq!(no_ball.ball.ball_number, 4);
    assert_eq!(no_ball.over.total_balls, 2);
    assert_eq!(no_ball.innings.total_overs, 0.2);

    // Four more legal balls finish the over at ball slot eight.
    let rest = feed_dots(&scoring, m.id, 1, 4).await?;
    let last = rest.last().expect("four outcomes");
    assert_eq!(last.ball.ball_number, 8);
    assert!(last.over_completed);
    assert_eq!(last.over.total_balls, 6);

    let card = last.scorecard.innings_card(1).expect("innings 1 card");
    assert_eq!(card.extras.byes, 2);
    assert_eq!(card.extras.wides, 1);
    assert_eq!(card.extras.no_balls, 1);
    assert_eq!(card.extras.total, 4);
    Ok(())
}

#[tokio::test]
async fn runs_off_the_bat_on_a_no_ball() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let mut event = BallEvent::no_ball(m.id, 1);
    event.run_type = RunType::Runs(4);
    let outcome = scoring.add_ball(event).await?;
    assert_eq!(outcome.ball.ball_type, BallType::NoBall);
    assert_eq!(outcome.ball.runs, 4);
    assert_eq!(outcome.innings.total_runs, 4);
    assert_eq!(outcome.innings.total_balls, 0);
    Ok(())
}

#[tokio::test]
async fn decimal_overs_track_partial_over() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let outcomes = feed_dots(&scoring, m.id, 1, 9).await?;
    let last = outcomes.last().expect("nine outcomes");
    assert_eq!(last.innings.total_balls, 9);
    assert_eq!(last.innings.total_overs, 1.3);
    assert_eq!(last.over.over_number, 2);
    Ok(())
}

#[tokio::test]
async fn next_delivery_after_full_over_opens_a_new_one() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    feed_dots(&scoring, m.id, 1, 6).await?;
    let seventh = scoring.add_ball(BallEvent::good(m.id, 1, 2)).await?;
    assert_eq!(seventh.over.over_number, 2);
    assert_eq!(seventh.ball.ball_number, 1);
    assert_eq!(seventh.scorecard.current_over, Some(2));

    let over = scoring.current_over(m.id).await?.expect("open over");
    assert_eq!(over.over_number, 2);
    assert_eq!(over.total_runs, 2);
    assert_eq!(over.balls.len(), 1);
    Ok(())
}

#[tokio::test]
async fn full_over_left_open_is_closed_before_next_ball() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    // Six legal balls on the row but the status never flipped to completed.
    let first = innings::require_by_match_and_number(state.db(), m.id, 1).await?;
    let stale = overs::create_over(state.db(), first.id, 1).await?;
    overs_sea::update_totals(
        state.db(),
        OverTotals {
            id: stale.id,
            total_runs: 6,
            total_balls: 6,
            total_wickets: 0,
            status: Progress::InProgress,
        },
    )
    .await?;

    let outcome = scoring.add_ball(BallEvent::good(m.id, 1, 4)).await?;
    assert_eq!(outcome.over.over_number, 2);
    assert_eq!(outcome.ball.ball_number, 1);
    assert_eq!(outcome.over.total_runs, 4);
    assert_eq!(outcome.innings.total_runs, 10);
    assert_eq!(outcome.innings.total_balls, 7);
    assert_eq!(outcome.innings.total_overs, 1.1);

    let card = outcome.scorecard.innings_card(1).expect("innings 1");
    assert_eq!(card.overs[0].over_number, 1);
    assert_eq!(card.overs[0].status, PlayStatus::Completed);
    assert_eq!(card.overs[1].status, PlayStatus::InProgress);
    assert_eq!(outcome.scorecard.current_over, Some(2));
    Ok(())
}

#[tokio::test]
async fn wicket_counts_on_over_and_innings() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let outcome = scoring
        .add_ball(BallEvent::wicket(m.id, 1, WicketType::Caught))
        .await?;
    assert!(outcome.ball.is_wicket);
    assert_eq!(outcome.ball.wicket_type, Some(WicketType::Caught));
    assert_eq!(outcome.ball.run_type, RunType::WicketCall);
    assert_eq!(outcome.over.total_wickets, 1);
    assert_eq!(outcome.innings.total_wickets, 1);
    assert_eq!(outcome.innings.total_balls, 1);
    Ok(())
}

#[tokio::test]
async fn malformed_event_leaves_state_untouched() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;
    let before = scoring.scorecard(m.id).await?;

    let err = scoring
        .add_ball(BallEvent::good(m.id, 1, 1).with_byes(-1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NegativeByes);

    let mut missing_type = BallEvent::wicket(m.id, 1, WicketType::Bowled);
    missing_type.wicket_type = None;
    let err = scoring.add_ball(missing_type).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::WicketTypeMismatch);

    let mut wd_on_good = BallEvent::good(m.id, 1, 0);
    wd_on_good.run_type = RunType::Wide;
    let err = scoring.add_ball(wd_on_good).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::RunTypeMismatch);

    let after = scoring.scorecard(m.id).await?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn oversized_byes_are_rejected_before_totals_move() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;
    feed_runs(&scoring, m.id, 1, &[1]).await?;
    let before = scoring.scorecard(m.id).await?;

    for runs in [0, 6] {
        let err = scoring
            .add_ball(BallEvent::good(m.id, 1, runs).with_byes(i32::MAX))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ExcessiveByes);
    }
    let err = scoring
        .add_ball(BallEvent::wide(m.id, 1).with_byes(8))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ExcessiveByes);
    assert_eq!(scoring.scorecard(m.id).await?, before);

    let outcome = scoring
        .add_ball(BallEvent::wide(m.id, 1).with_byes(7))
        .await?;
    assert_eq!(outcome.over.total_runs, 9);
    assert_eq!(outcome.innings.total_runs, 9);
    assert_eq!(outcome.over.total_balls, 1);
    Ok(())
}

#[tokio::test]
async fn match_must_be_live() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let mut new_match = support::match_setup::new_match(20);
    new_match.status = MatchStatus::Scheduled;
    let m = create_match_with(&state, new_match).await?;

    let err = scoring.start_scoring(m.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::MatchNotLive);
    assert_detail_contains(&err, "match is not live (status: scheduled)");

    let err = scoring
        .add_ball(BallEvent::good(m.id, 1, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MatchNotLive);
    Ok(())
}

#[tokio::test]
async fn unknown_match_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();

    let err = scoring
        .add_ball(BallEvent::good(4242, 1, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MatchNotFound);

    let err = scoring.scorecard(4242).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::MatchNotFound);
    Ok(())
}

#[tokio::test]
async fn invalid_innings_number_is_a_rule_violation() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let err = scoring
        .add_ball(BallEvent::good(m.id, 3, 1))
        .await
        .unwrap_err();
    assert!(err.is_rule_violation());
    assert_eq!(err.code(), ErrorCode::InvalidInningsNumber);
    Ok(())
}

#[tokio::test]
async fn every_write_bumps_the_match_version() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let scoring = state.scoring_engine();
    let m = started_match(&state, &scoring, 20).await?;

    let first = scoring.add_ball(BallEvent::good(m.id, 1, 1)).await?;
    let second = scoring.add_ball(BallEvent::good(m.id, 1, 1)).await?;
    assert!(second.scorecard.version > first.scorecard.version);
    assert_eq!(scoring.scorecard(m.id).await?.version, second.scorecard.version);
    Ok(())
}
