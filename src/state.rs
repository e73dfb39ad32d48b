// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::{GeminiClient, GenerationProvider};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// `None` when the process was started without a provider credential;
    /// chat requests then answer with the canned configuration reply.
    pub provider: Option<Arc<dyn GenerationProvider>>,
    pub env: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let provider = config
            .gemini_api_key
            .as_ref()
            .map(|key| Arc::new(GeminiClient::new(key.clone())) as Arc<dyn GenerationProvider>);
        Self {
            provider,
            env: config.env.clone(),
        }
    }

    /// State with an injected provider, for tests.
    pub fn with_provider(provider: Arc<dyn GenerationProvider>, env: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            env: env.into(),
        }
    }
}
