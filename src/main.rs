// src/main.rs
use std::sync::Arc;

use nyayamitra_backend::config::Config;
use nyayamitra_backend::routes;
use nyayamitra_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.gemini_api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; chat requests will receive a canned reply"
        );
    }

    let state = Arc::new(AppState::new(&config));
    let app = routes::create_router()
        .with_state(state)
        .layer(routes::cors_layer(&config));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(port = config.port, env = %config.env, "Nyaya Mitra relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
