use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest, ChatResponse},
    services::{
        session_manager::ChatMessage,
        triage::{Severity, triage},
        user_store::UserStore,
    },
    state::SharedState,
};
use crate::services::metrics_manager::MetricsData;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let greeting = greeting_message(&state.users).await;
    let session_id = match &payload.session_id {
        Some(s) if !s.trim().is_empty() => state.sessions.ensure_session(s, greeting).await,
        _ => state.sessions.create_session(greeting).await,
    };

    state
        .sessions
        .append_message(&session_id, ChatMessage::user(trimmed))
        .await;

    let reply = triage(trimmed);

    state.metrics.increment_rule(reply.rule.as_str()).await;
    state
        .metrics
        .increment_severity(reply.severity.as_str())
        .await;
    if reply.severity == Severity::High {
        tracing::warn!(session_id = %session_id, "high severity symptoms reported");
    }

    // UX pacing only. Zero in tests, so correctness never depends on it.
    tokio::time::sleep(state.reply_delay).await;

    state
        .sessions
        .append_message(
            &session_id,
            ChatMessage::assistant(
                reply.advice.clone(),
                Some(reply.severity),
                reply.facilities.clone(),
            ),
        )
        .await;

    Ok(Json(ChatResponse {
        session_id,
        reply: ChatReply {
            body: reply.advice,
            severity: reply.severity,
            facilities: reply.facilities,
        },
    }))
}

async fn greeting_message(users: &UserStore) -> ChatMessage {
    let body = match users.current().await {
        Some(user) => format!(
            "Hello {}! I'm your AI health assistant. Please describe your symptoms, and I'll \
             help analyze them and provide recommendations. How are you feeling today?",
            user.name
        ),
        None => "Hello! I'm your AI health assistant. Please describe your symptoms, and I'll \
                 help analyze them and provide recommendations. How are you feeling today?"
            .to_string(),
    };
    ChatMessage::assistant(body, None, Vec::new())
}

pub async fn get_history_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    match state.sessions.get_history(&session_id).await {
        Some(messages) => Ok(Json(messages)),
        None => Err(AppError::NotFound(format!(
            "unknown session: {session_id}"
        ))),
    }
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
