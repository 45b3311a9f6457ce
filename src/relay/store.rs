use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::info;

use crate::models::{DocumentSummary, User};
use super::registry::ConnectionRegistry;

/// A named shared text buffer and the sessions attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub content: String,
    /// Session ids in join order.
    pub members: IndexSet<String>,
}

/// Content plus resolved member list, sent on join and on document switch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub content: String,
    pub users: Vec<User>,
}

/// Every document seen since start. Documents are never evicted, even at
/// zero members.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the document, creating it with `default_content` if unseen.
    /// The flag is `true` when the document was created by this call.
    pub fn ensure(&mut self, doc_id: &str, default_content: &str) -> (&Document, bool) {
        let mut created = false;
        let doc = self.documents.entry(doc_id.to_string()).or_insert_with(|| {
            created = true;
            info!("Creating document {}", doc_id);
            Document {
                id: doc_id.to_string(),
                content: default_content.to_string(),
                members: IndexSet::new(),
            }
        });
        (doc, created)
    }

    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.documents.get(doc_id)
    }

    /// Overwrite the content. Last processed write wins.
    pub fn set_content(&mut self, doc_id: &str, content: String) -> bool {
        match self.documents.get_mut(doc_id) {
            Some(doc) => {
                doc.content = content;
                true
            }
            None => false,
        }
    }

    pub fn add_member(&mut self, doc_id: &str, session_id: &str) -> bool {
        self.documents
            .get_mut(doc_id)
            .map(|doc| doc.members.insert(session_id.to_string()))
            .unwrap_or(false)
    }

    /// Returns whether the session was a member. Non-members are a no-op.
    pub fn remove_member(&mut self, doc_id: &str, session_id: &str) -> bool {
        self.documents
            .get_mut(doc_id)
            .map(|doc| doc.members.shift_remove(session_id))
            .unwrap_or(false)
    }

    pub fn members(&self, doc_id: &str) -> impl Iterator<Item = &String> {
        self.documents
            .get(doc_id)
            .into_iter()
            .flat_map(|doc| doc.members.iter())
    }

    pub fn snapshot(&self, doc_id: &str, registry: &ConnectionRegistry) -> Option<Snapshot> {
        let doc = self.documents.get(doc_id)?;
        let users = doc
            .members
            .iter()
            .filter_map(|id| registry.get(id))
            .map(|session| session.to_user())
            .collect();
        Some(Snapshot {
            content: doc.content.clone(),
            users,
        })
    }

    /// Documents ordered by id with their member counts.
    pub fn list(&self) -> Vec<DocumentSummary> {
        let mut list: Vec<DocumentSummary> = self
            .documents
            .values()
            .map(|doc| DocumentSummary {
                id: doc.id.clone(),
                user_count: doc.members.len(),
            })
            .collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.documents.values().map(|doc| doc.members.len()).sum()
    }
}
