// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::triage::{Facility, Severity};

#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub body: String,
    pub origin: MessageOrigin,
    pub timestamp_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<Facility>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    User,
    Assistant,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl ChatMessage {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body: body.into(),
            origin: MessageOrigin::User,
            timestamp_ms: now_ms(),
            severity: None,
            facilities: Vec::new(),
        }
    }

    pub fn assistant(
        body: impl Into<String>,
        severity: Option<Severity>,
        facilities: Vec<Facility>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body: body.into(),
            origin: MessageOrigin::Assistant,
            timestamp_ms: now_ms(),
            severity,
            facilities,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub last_active: Instant,
}

impl Session {
    // Every fresh log opens with exactly one assistant greeting.
    fn new(id: impl Into<String>, greeting: ChatMessage) -> Self {
        Self {
            id: id.into(),
            messages: vec![greeting],
            last_active: Instant::now(),
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Create a fresh session seeded with a greeting and return its id.
    pub async fn create_session(&self, greeting: ChatMessage) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone(), greeting);

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        id
    }

    // Ensure there's a session with this id, seeding it if missing.
    pub async fn ensure_session(&self, id: &str, greeting: ChatMessage) -> String {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return id.to_string();
            }
        }
        let mut guard = self.inner.write().await;
        guard
            .entry(id.to_string())
            .or_insert_with(|| Session::new(id.to_string(), greeting));
        id.to_string()
    }

    // Append a message to a session's log and touch last_active.
    // Logs are append-only: prior entries are never mutated or removed.
    pub async fn append_message(&self, session_id: &str, message: ChatMessage) -> Option<usize> {
        let mut guard = self.inner.write().await;
        let entry = guard.get_mut(session_id)?;
        entry.messages.push(message);
        entry.last_active = Instant::now();
        Some(entry.messages.len())
    }

    /// Get a copy of the session log
    pub async fn get_history(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.messages.clone())
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        before - guard.len()
    }

    /// Number of sessions
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// List session ids
    pub async fn list_session_ids(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        guard.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn basic_session_flow() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let sid = mgr
            .create_session(ChatMessage::assistant("hi", None, Vec::new()))
            .await;
        assert!(!sid.is_empty());
        let len = mgr.append_message(&sid, ChatMessage::user("hello")).await;
        assert_eq!(len, Some(2));
        let history = mgr.get_history(&sid).await.unwrap();
        assert_eq!(history[0].origin, MessageOrigin::Assistant);
        assert_eq!(history[1].origin, MessageOrigin::User);
        assert!(mgr.remove_session(&sid).await);
    }
}
