//! Per-match serialization and optimistic versioning.
//!
//! Run:
//!   cargo test --test concurrency_tests

mod common;
mod support;

use scoring_backend::domain::types::{MatchStatus, Team};
use scoring_backend::domain::BallEvent;
use scoring_backend::errors::domain::{ConflictKind, DomainError};
use scoring_backend::repos::matches;
use scoring_backend::{AppError, ErrorCode, LiveScoring};
use support::{build_test_state, create_live_match, started_match};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deliveries_on_one_match_are_serialized() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let engine = state.scoring_engine();
    let m = started_match(&state, &engine, 20).await?;

    let mut handles = Vec::new();
    for _ in 0..12 {
        let engine = engine.clone();
        let match_id = m.id;
        handles.push(tokio::spawn(async move {
            engine.add_ball(BallEvent::good(match_id, 1, 1)).await
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked")?;
    }

    let card = engine.scorecard(m.id).await?;
    let innings = card.innings_card(1).expect("innings 1");
    assert_eq!(innings.total_runs, 12);
    assert_eq!(innings.total_balls, 12);
    assert_eq!(innings.total_overs, 2.0);
    assert_eq!(innings.overs.len(), 2);
    for over in &innings.overs {
        let numbers: Vec<u32> = over.balls.iter().map(|b| b.ball_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }
    assert!(state.locks.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn reads_observe_consistent_totals_during_writes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let engine = state.scoring_engine();
    let m = started_match(&state, &engine, 20).await?;

    let writer = {
        let engine = engine.clone();
        let match_id = m.id;
        tokio::spawn(async move {
            for r in [1, 2, 3, 4, 6, 0, 1, 2] {
                engine.add_ball(BallEvent::good(match_id, 1, r)).await?;
            }
            Ok::<_, AppError>(())
        })
    };

    for _ in 0..8 {
        let card = engine.scorecard(m.id).await?;
        let innings = card.innings_card(1).expect("innings 1");
        let over_runs: u32 = innings.overs.iter().map(|o| o.total_runs).sum();
        assert_eq!(innings.total_runs, over_runs);
        tokio::task::yield_now().await;
    }

    writer.await.expect("writer panicked")?;
    let card = engine.scorecard(m.id).await?;
    assert_eq!(card.innings_card(1).map(|i| i.total_runs), Some(19));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn separate_matches_score_independently() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let engine = state.scoring_engine();
    let first = started_match(&state, &engine, 20).await?;
    let second = started_match(&state, &engine, 20).await?;

    let a = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.add_ball(BallEvent::good(first.id, 1, 4)).await })
    };
    let b = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.add_ball(BallEvent::good(second.id, 1, 6)).await })
    };
    assert_eq!(a.await.expect("task a")?.innings.total_runs, 4);
    assert_eq!(b.await.expect("task b")?.innings.total_runs, 6);
    // Both locks were released and pruned once the writes finished.
    assert!(state.locks.is_empty());
    Ok(())
}

#[tokio::test]
async fn stale_match_version_is_a_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let stale = create_live_match(&state, 20).await?;

    let fresh = matches::set_batting_team(state.db(), &stale, Team::A).await?;
    assert_eq!(fresh.lock_version, stale.lock_version + 1);

    let err = matches::set_status(state.db(), &stale, MatchStatus::Completed)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::OptimisticLock);

    let current = matches::require_match(state.db(), stale.id).await?;
    assert_eq!(current.status, MatchStatus::Live);
    Ok(())
}
