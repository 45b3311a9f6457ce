use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::models::SendMessage;

/// Receiving end of a session's outbound queue, drained by its socket writer.
pub type Outbox = mpsc::UnboundedReceiver<String>;

/// Per-session outbound queues. Sends never wait on the recipient.
#[derive(Debug, Default)]
pub struct BroadcastHub {
    outboxes: HashMap<String, mpsc::UnboundedSender<String>>,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, session_id: &str) -> Outbox {
        let (tx, rx) = mpsc::unbounded_channel();
        self.outboxes.insert(session_id.to_string(), tx);
        rx
    }

    pub fn detach(&mut self, session_id: &str) {
        self.outboxes.remove(session_id);
    }

    /// Deliver `msg` to each of `members` except `exclude`. Returns the number
    /// of recipients that accepted it; closed queues are skipped.
    pub fn broadcast<'a, I>(&self, members: I, msg: &SendMessage, exclude: Option<&str>) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        let payload = match serde_json::to_string(msg) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize broadcast message: {}", e);
                return 0;
            }
        };

        let mut delivered = 0;
        for member in members {
            if exclude == Some(member.as_str()) {
                continue;
            }
            if self.push(member, payload.clone()) {
                delivered += 1;
            }
        }
        delivered
    }

    pub fn send_to(&self, session_id: &str, msg: &SendMessage) -> bool {
        match serde_json::to_string(msg) {
            Ok(payload) => self.push(session_id, payload),
            Err(e) => {
                error!("Failed to serialize message for {}: {}", session_id, e);
                false
            }
        }
    }

    fn push(&self, session_id: &str, payload: String) -> bool {
        match self.outboxes.get(session_id) {
            Some(tx) => match tx.send(payload) {
                Ok(()) => true,
                Err(_) => {
                    debug!("Outbox for {} is closed, skipping", session_id);
                    false
                }
            },
            None => {
                debug!("No outbox for {}, skipping", session_id);
                false
            }
        }
    }
}
