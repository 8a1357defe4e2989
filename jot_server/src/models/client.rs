use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils;

/// Sampling temperature used for summaries. Low so summaries stick to the
/// source text.
pub const SUMMARY_TEMPERATURE: f32 = 0.3;
pub const SUMMARY_MAX_TOKENS: u32 = 200;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Assistant,
    User,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(serde_query::Deserialize)]
pub struct GenerationResponse {
    #[query(".choices.[0].message.content")]
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelClientError {
    #[error("{0}")]
    ApiConnection(String),
    #[error("API error: {0}")]
    ApiStatus(u16),
    #[error("{0}")]
    ResponseJson(String),
}

#[derive(Clone, Deserialize)]
pub struct HttpClientConfig {
    #[serde(default = "utils::default_summarization_base_url")]
    pub base_url: String,
    #[serde(deserialize_with = "utils::deserialize_with_envsubst")]
    pub api_key: String,
    #[serde(default = "utils::default_summarization_model")]
    pub model: String,
    /// Deadline for a single summarization request.
    #[serde(default = "utils::default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub params: HashMap<String, String>,
}
