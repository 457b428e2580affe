//! In-memory session store.
//!
//! The default SessionStore: a per-process map, nothing persisted. A
//! process restart drops every in-flight conversation, which is the
//! documented tradeoff for this domain.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::DialogueSession;
use crate::domain::foundation::UserId;
use crate::ports::SessionStore;

/// Session map keyed by user id, last-writer-wins under concurrency.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, DialogueSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded sessions, for assertions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user: UserId) -> DialogueSession {
        let sessions = self.sessions.read().await;
        sessions.get(&user).copied().unwrap_or_default()
    }

    async fn set(&self, user: UserId, session: DialogueSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user, session);
    }

    async fn clear(&self, user: UserId) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&user);
    }
}
