// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::services::metrics_manager::MetricsManager;
use crate::services::session_manager::SessionManager;
use crate::services::user_store::UserStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub users: UserStore,
    pub metrics: MetricsManager,
    /// Artificial pause before each assistant reply. Zero in tests.
    pub reply_delay: Duration,
    pub admin_key: String,
}

impl AppState {
    pub fn new(
        session_ttl: Duration,
        users: UserStore,
        reply_delay: Duration,
        admin_key: impl Into<String>,
    ) -> Self {
        Self {
            sessions: SessionManager::new(session_ttl),
            users,
            metrics: MetricsManager::new(),
            reply_delay,
            admin_key: admin_key.into(),
        }
    }
}
