//! Realtime decorator: run the wrapped engine, then fan the result out.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::mpsc::error::SendError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info_span, warn, Instrument};

use crate::domain::ball_event::BallEvent;
use crate::domain::scorecard::{BallCard, OverCard, Scorecard};
use crate::error::AppError;
use crate::realtime::broadcast::{Broadcaster, ScoreEvent};
use crate::services::engine::LiveScoring;
use crate::services::match_locks::{MatchLocks, MatchWriteGuard};
use crate::services::scoring::{BallOutcome, StartOutcome, UndoOutcome};

/// Resolves once a dispatched batch has been handed to the broadcaster.
pub type DeliveryReceipt = oneshot::Receiver<()>;

struct Batch {
    version: i32,
    events: Vec<ScoreEvent>,
    done: oneshot::Sender<()>,
}

type Queues = DashMap<i64, mpsc::UnboundedSender<Batch>>;

/// Fire-and-forget publisher with one queue per match.
///
/// Batches for a match are published by a single worker in the order they
/// were dispatched, so subscribers never see an older version after a newer
/// one. The worker retires when its queue drains. Failures are logged and
/// never reach the caller.
#[derive(Clone)]
pub struct BroadcastDispatcher {
    broadcaster: Arc<dyn Broadcaster>,
    queues: Arc<Queues>,
    turns: Arc<MatchLocks>,
}

impl fmt::Debug for BroadcastDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BroadcastDispatcher")
            .field("active_queues", &self.queues.len())
            .finish_non_exhaustive()
    }
}

impl BroadcastDispatcher {
    pub fn new(broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            broadcaster,
            queues: Arc::new(DashMap::new()),
            turns: Arc::new(MatchLocks::new()),
        }
    }

    /// Exclusive turn for one match. Holding it across a mutation and its
    /// `dispatch` keeps queue order equal to commit order.
    pub async fn turn(&self, match_id: i64) -> MatchWriteGuard {
        self.turns.write(match_id).await
    }

    /// Matches with a live publishing worker.
    pub fn active_queues(&self) -> usize {
        self.queues.len()
    }

    pub fn dispatch(&self, match_id: i64, version: i32, events: Vec<ScoreEvent>) -> DeliveryReceipt {
        let (done, receipt) = oneshot::channel();
        let batch = Batch {
            version,
            events,
            done,
        };

        // Sending under the entry guard pairs with the worker's retire check.
        let mut queue = self
            .queues
            .entry(match_id)
            .or_insert_with(|| self.spawn_worker(match_id));
        if let Err(SendError(batch)) = queue.send(batch) {
            // Worker died mid-batch; replace it.
            warn!(match_id, "Broadcast worker gone, restarting");
            *queue = self.spawn_worker(match_id);
            if let Err(SendError(lost)) = queue.send(batch) {
                warn!(match_id, version = lost.version, "Broadcast batch dropped");
            }
        }
        receipt
    }

    fn spawn_worker(&self, match_id: i64) -> mpsc::UnboundedSender<Batch> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Batch>();
        let broadcaster = Arc::clone(&self.broadcaster);
        let queues = Arc::clone(&self.queues);
        debug!(match_id, "Starting broadcast worker");
        tokio::spawn(async move {
            while let Some(batch) = rx.recv().await {
                let span = info_span!("broadcast", match_id, version = batch.version);
                publish_batch(broadcaster.as_ref(), match_id, batch)
                    .instrument(span)
                    .await;
                if queues.remove_if(&match_id, |_, _| rx.is_empty()).is_some() {
                    break;
                }
            }
        });
        tx
    }
}

async fn publish_batch(broadcaster: &dyn Broadcaster, match_id: i64, batch: Batch) {
    let Batch {
        version,
        events,
        done,
    } = batch;
    for event in events {
        let name = event.name();
        if let Err(err) = broadcaster.publish(match_id, version, event).await {
            warn!(event = name, error = %err, "Broadcast failed");
        }
    }
    // Nobody waiting on the receipt is the common case.
    let _ = done.send(());
}

/// Wraps any `LiveScoring` and broadcasts every successful mutation.
pub struct RealtimeScoring<E> {
    inner: E,
    dispatcher: BroadcastDispatcher,
}

impl<E: LiveScoring> RealtimeScoring<E> {
    pub fn new(inner: E, dispatcher: BroadcastDispatcher) -> Self {
        Self { inner, dispatcher }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Escape hatch for transport-defined messages.
    pub fn publish_custom(
        &self,
        match_id: i64,
        version: i32,
        name: impl Into<String>,
        payload: serde_json::Value,
    ) -> DeliveryReceipt {
        self.dispatcher.dispatch(
            match_id,
            version,
            vec![ScoreEvent::Custom {
                name: name.into(),
                payload,
            }],
        )
    }
}

fn over_card(scorecard: &Scorecard, innings_number: u8, over_number: u32) -> Option<OverCard> {
    scorecard
        .innings_card(innings_number)?
        .overs
        .iter()
        .find(|o| o.over_number == over_number)
        .cloned()
}

fn start_events(outcome: &StartOutcome) -> Vec<ScoreEvent> {
    let mut events = vec![ScoreEvent::MatchStarted {
        scorecard: outcome.scorecard.clone(),
    }];
    if let Some(card) = outcome.scorecard.innings_card(outcome.innings.innings_number) {
        events.push(ScoreEvent::InningsStarted {
            innings: card.clone(),
        });
    }
    events
}

fn ball_events(outcome: &BallOutcome) -> Vec<ScoreEvent> {
    let innings_number = outcome.innings.innings_number;
    let mut events = vec![ScoreEvent::BallAdded {
        innings_number,
        over_number: outcome.over.over_number,
        ball: BallCard::from(&outcome.ball),
    }];
    if outcome.ball.is_wicket {
        events.push(ScoreEvent::WicketUpdated {
            innings_number,
            total_wickets: outcome.innings.total_wickets,
            wicket_type: outcome.ball.wicket_type,
        });
    }
    events.push(ScoreEvent::ScoreUpdated {
        scorecard: outcome.scorecard.clone(),
    });
    if outcome.over_completed {
        if let Some(over) = over_card(&outcome.scorecard, innings_number, outcome.over.over_number)
        {
            events.push(ScoreEvent::OverCompleted {
                innings_number,
                over,
            });
        }
    }
    if let Some(started) = &outcome.started_innings {
        if let Some(card) = outcome.scorecard.innings_card(started.innings_number) {
            events.push(ScoreEvent::InningsStarted {
                innings: card.clone(),
            });
        }
    }
    if outcome.match_completed {
        events.push(ScoreEvent::MatchEnded {
            reason: outcome.completion_reason.clone().unwrap_or_default(),
            result: outcome.scorecard.result,
            scorecard: outcome.scorecard.clone(),
        });
    }
    events
}

fn undo_events(outcome: &UndoOutcome) -> Vec<ScoreEvent> {
    vec![
        ScoreEvent::BallUndone {
            innings_number: outcome.innings_number,
            over_number: outcome.over_number,
            ball_number: outcome.removed.ball_number,
        },
        ScoreEvent::ScoreUpdated {
            scorecard: outcome.scorecard.clone(),
        },
    ]
}

#[async_trait]
impl<E: LiveScoring> LiveScoring for RealtimeScoring<E> {
    async fn start_scoring(&self, match_id: i64) -> Result<StartOutcome, AppError> {
        let _turn = self.dispatcher.turn(match_id).await;
        let outcome = self.inner.start_scoring(match_id).await?;
        self.dispatcher
            .dispatch(match_id, outcome.scorecard.version, start_events(&outcome));
        Ok(outcome)
    }

    async fn add_ball(&self, event: BallEvent) -> Result<BallOutcome, AppError> {
        let match_id = event.match_id;
        let _turn = self.dispatcher.turn(match_id).await;
        let outcome = self.inner.add_ball(event).await?;
        self.dispatcher
            .dispatch(match_id, outcome.scorecard.version, ball_events(&outcome));
        Ok(outcome)
    }

    async fn undo_ball(
        &self,
        match_id: i64,
        innings_number: u8,
    ) -> Result<UndoOutcome, AppError> {
        let _turn = self.dispatcher.turn(match_id).await;
        let outcome = self.inner.undo_ball(match_id, innings_number).await?;
        self.dispatcher
            .dispatch(match_id, outcome.scorecard.version, undo_events(&outcome));
        Ok(outcome)
    }

    async fn scorecard(&self, match_id: i64) -> Result<Scorecard, AppError> {
        self.inner.scorecard(match_id).await
    }

    async fn current_over(&self, match_id: i64) -> Result<Option<OverCard>, AppError> {
        self.inner.current_over(match_id).await
    }
}
