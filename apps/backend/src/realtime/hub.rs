use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use super::broadcast::{Broadcaster, ScoreEvent};
use super::protocol::{ServerMsg, PROTOCOL_VERSION};
use crate::error::AppError;

/// A live subscription to one match. Dropping the receiver is enough to stop
/// delivery; the hub prunes closed senders on the next publish.
#[derive(Debug)]
pub struct Subscription {
    pub match_id: i64,
    pub token: Uuid,
    pub receiver: mpsc::UnboundedReceiver<ServerMsg>,
}

/// In-process registry of match subscribers.
#[derive(Debug, Default)]
pub struct MatchHub {
    sessions: DashMap<i64, DashMap<Uuid, mpsc::UnboundedSender<ServerMsg>>>,
}

impl MatchHub {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn subscribe(&self, match_id: i64) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let token = Uuid::new_v4();
        // Receiver is still held below, so this send cannot fail.
        let _ = tx.send(ServerMsg::Subscribed {
            protocol: PROTOCOL_VERSION,
            match_id,
        });
        let entry = self.sessions.entry(match_id).or_default();
        entry.insert(token, tx);
        Subscription {
            match_id,
            token,
            receiver: rx,
        }
    }

    pub fn unsubscribe(&self, match_id: i64, token: Uuid) {
        if let Some(entry) = self.sessions.get(&match_id) {
            entry.remove(&token);
        }
        self.sessions.remove_if(&match_id, |_, subs| subs.is_empty());
    }

    pub fn subscriber_count(&self, match_id: i64) -> usize {
        self.sessions.get(&match_id).map_or(0, |entry| entry.len())
    }

    /// Deliver to every live subscriber of the match; returns how many got it.
    pub fn broadcast(&self, match_id: i64, message: ServerMsg) -> usize {
        let Some(entry) = self.sessions.get(&match_id) else {
            return 0;
        };
        let mut delivered = 0;
        entry.retain(|_, sender| {
            if sender.send(message.clone()).is_ok() {
                delivered += 1;
                true
            } else {
                false
            }
        });
        delivered
    }
}

#[async_trait]
impl Broadcaster for MatchHub {
    async fn publish(
        &self,
        match_id: i64,
        version: i32,
        event: ScoreEvent,
    ) -> Result<(), AppError> {
        let name = event.name();
        let delivered = self.broadcast(
            match_id,
            ServerMsg::Score {
                match_id,
                version,
                event,
            },
        );
        debug!(match_id, version, event = name, delivered, "Published score event");
        Ok(())
    }
}
