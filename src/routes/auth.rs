use axum::{Json, extract::State};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{LoginRequest, RegisterRequest},
    services::user_store::UserRecord,
    state::SharedState,
};

pub async fn register_handler(
    State(state): State<SharedState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserRecord>, AppError> {
    let name = payload.name.trim();
    let email = payload.email.trim();
    let address = payload.address.trim();

    if name.is_empty() || email.is_empty() || address.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Name, email, address and password are required".to_string(),
        ));
    }
    if payload.password != payload.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match".to_string()));
    }

    let record = UserRecord {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    };
    state.users.save(record.clone()).await?;
    tracing::info!(email = %record.email, "user registered");

    Ok(Json(record))
}

// Demo placeholder: any non-empty credentials are accepted. A stored record
// for the same email is kept; otherwise a stand-in record is created.
pub async fn login_handler(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserRecord>, AppError> {
    let email = payload.email.trim();

    if email.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let record = match state.users.current().await {
        Some(existing) if existing.email == email => existing,
        _ => UserRecord {
            id: Uuid::new_v4().to_string(),
            name: "Demo User".to_string(),
            email: email.to_string(),
            address: "Demo Address".to_string(),
        },
    };
    state.users.save(record.clone()).await?;
    tracing::info!(email = %record.email, "user logged in");

    Ok(Json(record))
}

pub async fn logout_handler(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    state.users.clear().await?;
    tracing::info!("user logged out");
    Ok(Json(json!({ "ok": true })))
}

pub async fn me_handler(State(state): State<SharedState>) -> Result<Json<UserRecord>, AppError> {
    match state.users.current().await {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::NotFound("No user is logged in".to_string())),
    }
}
