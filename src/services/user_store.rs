// src/services/user_store.rs
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::AppError;

/// The single current-user record. The password a caller supplied during
/// register/login is examined transiently and never stored here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Holds at most one logical user at a time, mirrored to a local JSON file
/// so the record survives restarts.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<Option<UserRecord>>>,
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            path: path.into(),
        }
    }

    /// Load any previously persisted record. A missing file just means no
    /// user; a corrupt one is discarded with a warning.
    pub async fn load(&self) -> Result<(), AppError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<UserRecord>(&content) {
            Ok(record) => {
                let mut guard = self.inner.write().await;
                *guard = Some(record);
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable user record");
            }
        }
        Ok(())
    }

    /// Persist a record, replacing any prior one.
    pub async fn save(&self, record: UserRecord) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&record)?;
        tokio::fs::write(&self.path, json).await?;
        let mut guard = self.inner.write().await;
        *guard = Some(record);
        Ok(())
    }

    pub async fn current(&self) -> Option<UserRecord> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Remove the record from memory and disk.
    pub async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        let mut guard = self.inner.write().await;
        *guard = None;
        Ok(())
    }
}
