// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, read once at startup from the environment
/// (a `.env` file is honored via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Artificial pause before an assistant reply, for UX pacing only.
    pub reply_delay: Duration,
    /// Where the single current-user record is persisted.
    pub user_store_path: PathBuf,
    pub admin_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) => v.parse()?,
            Err(_) => 3000,
        };
        let delay_ms = match std::env::var("REPLY_DELAY_MS") {
            Ok(v) => v.parse()?,
            Err(_) => 1500,
        };
        let user_store_path = std::env::var("USER_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("doctorcare-user.json"));
        let admin_key = std::env::var("ADMIN_KEY").unwrap_or_else(|_| "secret123".to_string());

        Ok(Self {
            port,
            reply_delay: Duration::from_millis(delay_ms),
            user_store_path,
            admin_key,
        })
    }
}
