use std::collections::HashMap;
use tracing::debug;

use crate::models::User;
use super::identity;

/// State for one connected participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub document_id: String,
    pub name: String,
    pub color: &'static str,
    pub cursor_position: i64,
}

impl Session {
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            color: self.color.to_string(),
            cursor_position: self.cursor_position,
        }
    }
}

/// Live sessions keyed by session id.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    sessions: HashMap<String, Session>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a fresh id, default name and a palette colour.
    pub fn register(&mut self, document_id: &str) -> Session {
        let mut id = identity::new_session_id();
        while self.sessions.contains_key(&id) {
            id = identity::new_session_id();
        }
        let session = Session {
            name: identity::default_name(&id),
            id: id.clone(),
            document_id: document_id.to_string(),
            color: identity::pick_color(),
            cursor_position: 0,
        };
        debug!("Registered session {} ({})", session.id, session.name);
        self.sessions.insert(id, session.clone());
        session
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Drop the session. A second call for the same id returns `None`.
    pub fn remove(&mut self, id: &str) -> Option<Session> {
        self.sessions.remove(id)
    }

    pub fn set_name(&mut self, id: &str, name: String) -> Option<&Session> {
        let session = self.sessions.get_mut(id)?;
        session.name = name;
        Some(session)
    }

    pub fn set_cursor(&mut self, id: &str, position: i64) -> Option<&Session> {
        let session = self.sessions.get_mut(id)?;
        session.cursor_position = position;
        Some(session)
    }

    pub fn set_document(&mut self, id: &str, document_id: &str) -> Option<&Session> {
        let session = self.sessions.get_mut(id)?;
        session.document_id = document_id.to_string();
        Some(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
