// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::{ChatResponse, ErrorBody};
use crate::services::gemini::ProviderError;
use crate::services::prompt::{CANNED_MISSING_KEY_REPLY, CANNED_UPSTREAM_REPLY};

/// Relay failure taxonomy. Everything except a validation failure degrades
/// to a canned reply body so the widget always has something to render.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("message is required")]
    MissingMessage,
    #[error("generation provider credential is not configured")]
    MissingCredential { session_id: Option<String> },
    #[error("upstream generation request failed")]
    Upstream {
        session_id: Option<String>,
        #[source]
        source: ProviderError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Message is required".to_string(),
                }),
            )
                .into_response(),
            AppError::MissingCredential { session_id } => {
                tracing::error!("chat request refused: GEMINI_API_KEY is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ChatResponse {
                        reply: CANNED_MISSING_KEY_REPLY.to_string(),
                        session_id,
                    }),
                )
                    .into_response()
            }
            AppError::Upstream { session_id, source } => {
                // Log the real cause; the client only ever sees the apology.
                tracing::error!(error = %source, "generation provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ChatResponse {
                        reply: CANNED_UPSTREAM_REPLY.to_string(),
                        session_id,
                    }),
                )
                    .into_response()
            }
        }
    }
}
