//! Live document relay: sessions, documents, fan-out and the message
//! dispatcher that ties them together.
//!
//! All state lives in one [`RelayState`] behind a single async mutex. Every
//! connection event and inbound frame is applied to completion while the lock
//! is held and outbound frames are queued before it is released, so all
//! sessions observe edits to a document in the same order.

pub mod hub;
pub mod identity;
pub mod protocol;
pub mod registry;
pub mod store;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{DocumentSummary, ReceivedMessage};
pub use hub::Outbox;
pub use protocol::{DocumentDefaults, RelayState, SessionPhase};
pub use store::Snapshot;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("malformed frame: {0}")]
    MalformedFrame(#[from] serde_json::Error),
    #[error("unknown session {0}")]
    UnknownSession(String),
}

/// Aggregate counters for the diagnostics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayStats {
    pub sessions: usize,
    pub documents: usize,
    pub members: usize,
}

#[derive(Debug)]
pub struct Relay {
    state: Mutex<RelayState>,
}

impl Relay {
    pub fn new(defaults: DocumentDefaults) -> Self {
        Self {
            state: Mutex::new(RelayState::new(defaults)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(DocumentDefaults {
            default_id: config.default_document_id.clone(),
            default_content: config.default_document_content.clone(),
            new_content: config.new_document_content.clone(),
        })
    }

    /// Accept a new participant. Returns its session id, the phase it is in
    /// once attached, and its outbound queue.
    pub async fn connect(&self) -> (String, SessionPhase, Outbox) {
        let (session, outbox) = self.state.lock().await.connect();
        (session.id, SessionPhase::Active(session.document_id), outbox)
    }

    /// Parse and apply one text frame. On success returns the session's
    /// phase after the frame was applied.
    pub async fn handle_text(&self, session_id: &str, text: &str) -> Result<SessionPhase, RelayError> {
        let msg: ReceivedMessage = serde_json::from_str(text)?;
        let mut state = self.state.lock().await;
        match state.dispatch(session_id, msg) {
            Some(doc_id) => Ok(SessionPhase::Active(doc_id)),
            None => Err(RelayError::UnknownSession(session_id.to_string())),
        }
    }

    /// Tear down a session. Safe to call more than once.
    pub async fn disconnect(&self, session_id: &str) -> bool {
        self.state.lock().await.disconnect(session_id)
    }

    pub async fn snapshot(&self, doc_id: &str) -> Option<Snapshot> {
        let state = self.state.lock().await;
        state.store.snapshot(doc_id, &state.registry)
    }

    pub async fn list_documents(&self) -> Vec<DocumentSummary> {
        self.state.lock().await.store.list()
    }

    /// Ensure a document exists. Existing documents keep their content.
    pub async fn create_document(&self, doc_id: &str, content: Option<&str>) -> bool {
        let mut state = self.state.lock().await;
        let seed = match content {
            Some(content) => content.to_string(),
            None => state.defaults.new_content.clone(),
        };
        let (_, created) = state.store.ensure(doc_id, &seed);
        created
    }

    pub async fn stats(&self) -> RelayStats {
        let state = self.state.lock().await;
        RelayStats {
            sessions: state.registry.len(),
            documents: state.store.len(),
            members: state.store.member_count(),
        }
    }

    pub async fn default_document_id(&self) -> String {
        self.state.lock().await.defaults.default_id.clone()
    }
}
