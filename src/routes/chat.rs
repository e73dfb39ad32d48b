// src/routes/chat.rs
use axum::{Json, extract::State};
use chrono::Utc;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse, HealthResponse};
use crate::services::prompt::build_prompt;
use crate::state::SharedState;

/// The relay is stateless: the session identifier is echoed for client-side
/// correlation, and only the latest message reaches the provider.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => return Err(AppError::MissingMessage),
    };
    let session_id = payload.session_id.clone();

    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| AppError::MissingCredential {
            session_id: session_id.clone(),
        })?;

    tracing::info!(
        session_id = session_id.as_deref().unwrap_or("-"),
        language = payload.language_code.as_deref().unwrap_or("-"),
        "forwarding chat message to generation provider"
    );

    let prompt = build_prompt(&message, payload.language_code.as_deref());
    let reply = provider
        .generate(&prompt)
        .await
        .map_err(|source| AppError::Upstream {
            session_id: session_id.clone(),
            source,
        })?;

    Ok(Json(ChatResponse { reply, session_id }))
}

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Nyaya Mitra API is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        env: state.env.clone(),
    })
}
