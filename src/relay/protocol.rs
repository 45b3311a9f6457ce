use chrono::Utc;
use tracing::{debug, info};

use crate::models::{
    ContentUpdateMessage, CursorUpdateMessage, DocumentChangedMessage, InitMessage,
    ReceivedMessage, SendMessage, UserInfoUpdateMessage, UserJoinedMessage, UserLeftMessage,
};
use super::hub::{BroadcastHub, Outbox};
use super::registry::{ConnectionRegistry, Session};
use super::store::DocumentStore;

/// Lifecycle of one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Connecting,
    Active(String),
    Disconnected,
}

/// Seed values for documents the relay creates on its own.
#[derive(Debug, Clone)]
pub struct DocumentDefaults {
    pub default_id: String,
    pub default_content: String,
    pub new_content: String,
}

/// Everything the relay mutates. Only ever touched under the relay lock.
#[derive(Debug)]
pub struct RelayState {
    pub registry: ConnectionRegistry,
    pub store: DocumentStore,
    pub hub: BroadcastHub,
    pub defaults: DocumentDefaults,
}

impl RelayState {
    pub fn new(defaults: DocumentDefaults) -> Self {
        let mut store = DocumentStore::new();
        store.ensure(&defaults.default_id, &defaults.default_content);
        Self {
            registry: ConnectionRegistry::new(),
            store,
            hub: BroadcastHub::new(),
            defaults,
        }
    }

    /// Register a session, attach it to the default document, send it the
    /// `init` snapshot and announce it to the peers already there.
    pub fn connect(&mut self) -> (Session, Outbox) {
        let doc_id = self.defaults.default_id.clone();
        self.store.ensure(&doc_id, &self.defaults.default_content);

        let session = self.registry.register(&doc_id);
        let outbox = self.hub.attach(&session.id);
        self.store.add_member(&doc_id, &session.id);
        info!("Session {} joined document {}", session.id, doc_id);

        let (content, users) = self.snapshot_parts(&doc_id);
        self.hub.send_to(
            &session.id,
            &SendMessage::Init(InitMessage {
                user_id: session.id.clone(),
                content,
                users,
            }),
        );

        self.hub.broadcast(
            self.store.members(&doc_id),
            &SendMessage::UserJoined(UserJoinedMessage { user: session.to_user() }),
            Some(&session.id),
        );

        (session, outbox)
    }

    /// Apply one inbound message from `session_id`. Returns the document the
    /// session is attached to afterwards, or `None` for an unknown session.
    pub fn dispatch(&mut self, session_id: &str, msg: ReceivedMessage) -> Option<String> {
        let doc_id = self.registry.get(session_id)?.document_id.clone();

        match msg {
            ReceivedMessage::ContentChange(change) => {
                self.store.set_content(&doc_id, change.content.clone());
                self.hub.broadcast(
                    self.store.members(&doc_id),
                    &SendMessage::ContentUpdate(ContentUpdateMessage {
                        content: change.content,
                        user_id: session_id.to_string(),
                        timestamp: Utc::now().timestamp_millis(),
                    }),
                    Some(session_id),
                );
            }
            ReceivedMessage::CursorPosition(cursor) => {
                self.registry.set_cursor(session_id, cursor.position);
                self.hub.broadcast(
                    self.store.members(&doc_id),
                    &SendMessage::CursorUpdate(CursorUpdateMessage {
                        user_id: session_id.to_string(),
                        position: cursor.position,
                    }),
                    Some(session_id),
                );
            }
            ReceivedMessage::UserInfo(info) => {
                if let Some(name) = info.name.filter(|n| !n.is_empty()) {
                    self.registry.set_name(session_id, name);
                }
                if let Some(session) = self.registry.get(session_id) {
                    let user = session.to_user();
                    self.hub.broadcast(
                        self.store.members(&doc_id),
                        &SendMessage::UserInfoUpdate(UserInfoUpdateMessage { user }),
                        Some(session_id),
                    );
                }
            }
            ReceivedMessage::ChangeDocument(change) => {
                return Some(self.switch_document(session_id, &doc_id, &change.document_id));
            }
            ReceivedMessage::Unknown => {
                debug!("Ignoring unrecognized message from {}", session_id);
            }
        }

        Some(doc_id)
    }

    fn switch_document(&mut self, session_id: &str, old_doc: &str, new_doc: &str) -> String {
        self.store.remove_member(old_doc, session_id);
        self.hub.broadcast(
            self.store.members(old_doc),
            &SendMessage::UserLeft(UserLeftMessage { user_id: session_id.to_string() }),
            None,
        );

        self.store.ensure(new_doc, &self.defaults.new_content);
        self.store.add_member(new_doc, session_id);
        self.registry.set_document(session_id, new_doc);
        info!("Session {} switched from {} to {}", session_id, old_doc, new_doc);

        let (content, users) = self.snapshot_parts(new_doc);
        self.hub.send_to(
            session_id,
            &SendMessage::DocumentChanged(DocumentChangedMessage { content, users }),
        );

        if let Some(session) = self.registry.get(session_id) {
            let user = session.to_user();
            self.hub.broadcast(
                self.store.members(new_doc),
                &SendMessage::UserJoined(UserJoinedMessage { user }),
                Some(session_id),
            );
        }

        new_doc.to_string()
    }

    /// Detach and forget the session, telling its peers it left. Only the
    /// first call for a session has any effect.
    pub fn disconnect(&mut self, session_id: &str) -> bool {
        let Some(session) = self.registry.remove(session_id) else {
            return false;
        };
        self.hub.detach(session_id);
        self.store.remove_member(&session.document_id, session_id);
        info!("Session {} left document {}", session_id, session.document_id);

        self.hub.broadcast(
            self.store.members(&session.document_id),
            &SendMessage::UserLeft(UserLeftMessage { user_id: session_id.to_string() }),
            None,
        );
        true
    }

    fn snapshot_parts(&self, doc_id: &str) -> (String, Vec<crate::models::User>) {
        self.store
            .snapshot(doc_id, &self.registry)
            .map(|s| (s.content, s.users))
            .unwrap_or_default()
    }
}
