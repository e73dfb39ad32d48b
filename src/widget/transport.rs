// src/widget/transport.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::message::{ChatRequest, ChatResponse};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to reach the relay endpoint: {0}")]
    Network(#[from] reqwest::Error),
    #[error("relay endpoint responded with status {0}")]
    Status(u16),
}

/// The widget's only outbound seam: one relay round trip per send.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(
        &self,
        message: &str,
        session_id: &str,
        language_code: Option<&str>,
    ) -> Result<ChatResponse, TransportError>;
}

/// reqwest-backed transport posting to the relay's `/api/chat`.
pub struct HttpRelayTransport {
    http: reqwest::Client,
    api_url: String,
}

impl HttpRelayTransport {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn send(
        &self,
        message: &str,
        session_id: &str,
        language_code: Option<&str>,
    ) -> Result<ChatResponse, TransportError> {
        let request = ChatRequest {
            message: Some(message.to_string()),
            session_id: Some(session_id.to_string()),
            language_code: language_code.map(|c| c.to_string()),
        };

        let response = self.http.post(&self.api_url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}
