use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::chat::SessionHandle;

/// Active games keyed by the host's session identifier.
///
/// A session id is present exactly while a game is in progress for that
/// conversation. Every operation is a single map read, write or delete; the
/// lock is never held across a remote call.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn contains(&self, session_id: &str) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }

    /// Stores `handle`, returning whichever handle it replaced.
    pub async fn insert(&self, session_id: &str, handle: SessionHandle) -> Option<SessionHandle> {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), handle)
    }

    pub async fn remove(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.write().await.remove(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    pub async fn session_ids(&self) -> Vec<String> {
        self.sessions.read().await.keys().cloned().collect()
    }
}
