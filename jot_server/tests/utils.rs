#![allow(dead_code)]

use jot_server::models::{config::JotConfig, state::JotState};
use reqwest::Response;
use serde_json::json;
use std::path::PathBuf;
use std::process::{Command, Output};
use tokio::net::TcpListener;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const MODEL_API_KEY: &str = "server-side-key";
pub const USER_TOKEN: &str = "alice";

pub async fn assert_ok_response(response: Response) -> Result<Response, String> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let body = response.text().await.map_err(|err| format!("{err:?}"))?;
        Err(body)
    }
}

pub fn reset_database(db_connection_url: &str) -> Result<Output, String> {
    assert!(db_connection_url.ends_with("/test"));
    let migrations_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    Command::new("diesel")
        .args([
            "database",
            "reset",
            "--migration-dir",
            migrations_dir
                .to_str()
                .expect("migration dir should be valid"),
        ])
        .output()
        .map_err(|err| format!("{err:?}"))
}

/// State backed by an in-memory store that summarizes through `model_url`.
pub async fn memory_state(model_url: &str) -> Result<JotState, Box<dyn std::error::Error>> {
    memory_state_with_params(model_url, json!({})).await
}

/// Same as [`memory_state`], with extra query params on every model request.
pub async fn memory_state_with_params(
    model_url: &str,
    params: serde_json::Value,
) -> Result<JotState, Box<dyn std::error::Error>> {
    let config: JotConfig = serde_json::from_value(json!(
        {
            "store": {"backend": "memory"},
            "summarization": {
                "base_url": model_url,
                "api_key": MODEL_API_KEY,
                "model": "test-model",
                "timeout_secs": 1,
                "params": params
            }
        }
    ))?;
    jot_server::build_state(config).await
}

/// Serve the API on an ephemeral port and return its base URL.
pub async fn spawn_server(state: JotState) -> Result<String, Box<dyn std::error::Error>> {
    let (router, _) = jot_server::router(state).split_for_parts();
    let router = jot_server::with_layers(router);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let _ = tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(format!("http://{addr}"))
}

pub fn completion(content: &str) -> serde_json::Value {
    json!(
        {
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        }
    )
}

/// Mount a chat completion mock that expects the server's own API key.
pub async fn mock_completion(server: &MockServer, template: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", format!("Bearer {MODEL_API_KEY}").as_str()))
        .respond_with(template)
        .expect(expected_calls)
        .mount(server)
        .await;
}
