// src/routes/mod.rs
pub mod chat;

use axum::Router;
use axum::http::request::Parts;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use chat::{chat_handler, health_handler};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Origin allow-list check. Requests without an Origin header are not CORS
/// requests and pass through untouched.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let allowed = config.allowed_origins();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin
                .to_str()
                .map(|o| allowed.iter().any(|a| a == o))
                .unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
