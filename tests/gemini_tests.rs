use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nyayamitra_backend::services::gemini::{GeminiClient, GenerationProvider, ProviderError};

#[tokio::test]
async fn extracts_first_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "prompt text"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello"}, {"text": "ignored"}]}}
            ]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_endpoint("test-key", format!("{}/generate", server.uri()));
    let reply = client.generate("prompt text").await.unwrap();
    assert_eq!(reply, "Hello");
}

#[tokio::test]
async fn sends_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_endpoint("test-key", server.uri());
    assert!(client.generate("prompt").await.is_ok());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_endpoint("test-key", server.uri());
    match client.generate("prompt").await {
        Err(ProviderError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_candidates_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = GeminiClient::with_endpoint("test-key", server.uri());
    assert!(matches!(
        client.generate("prompt").await,
        Err(ProviderError::MalformedResponse)
    ));
}

#[tokio::test]
async fn candidate_without_parts_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": []}}]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_endpoint("test-key", server.uri());
    assert!(matches!(
        client.generate("prompt").await,
        Err(ProviderError::MalformedResponse)
    ));
}
