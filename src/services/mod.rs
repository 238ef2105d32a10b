pub mod metrics_manager;
pub mod session_manager;
pub mod triage;
pub mod user_store;
