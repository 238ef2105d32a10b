// src/routes/mod.rs
pub mod auth;
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use auth::{login_handler, logout_handler, me_handler, register_handler};
use chat::{chat_handler, get_history_handler, get_metrics_handler};
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ));

    let auth_routes = Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/me", get(me_handler));

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/chat/{session_id}", get(get_history_handler))
        .nest("/auth", auth_routes)
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn admin_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // API Key check.
    match req.headers().get("x-admin-key") {
        Some(val) if val.as_bytes() == state.admin_key.as_bytes() => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
