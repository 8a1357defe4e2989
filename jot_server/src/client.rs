use std::time::Duration;

use tracing::debug;

use crate::models::{
    client::{
        GenerationRequest, GenerationResponse, HttpClientConfig, ModelClientError,
        SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE,
    },
    prompts::{SummaryInstruction, SummaryPrompt, SystemPrompt},
};

/// Client for the external chat completion API used to summarize notes.
#[derive(Clone)]
pub struct ModelClient {
    config: HttpClientConfig,
    client: reqwest::Client,
}

impl ModelClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let header_map = reqwest::header::HeaderMap::try_from(&config.headers)?;
        let client = reqwest::Client::builder()
            .default_headers(header_map)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Summarize text into a handful of bullet points. Makes exactly one
    /// request and returns the model's reply as-is.
    pub async fn summarize(&self, text: &str) -> Result<String, ModelClientError> {
        let instruction = SummaryInstruction { text };
        let request = GenerationRequest {
            model: self.config.model.clone(),
            messages: SummaryPrompt {}.to_messages(instruction.to_string()),
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
        };
        let response: GenerationResponse = self.post("/chat/completions", &request).await?;
        Ok(response.content)
    }

    async fn post<Request, ResponseModel>(
        &self,
        endpoint: &str,
        request: &Request,
    ) -> Result<ResponseModel, ModelClientError>
    where
        Request: serde::ser::Serialize,
        ResponseModel: serde::de::DeserializeOwned,
    {
        let base_url = self.config.base_url.trim_end_matches("/");
        let url = format!("{base_url}{endpoint}");
        debug!("sending request to {url}");
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .query(&self.config.params)
            .json(request)
            .send()
            .await
            .map_err(|err| ModelClientError::ApiConnection(err.without_url().to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ModelClientError::ApiStatus(status.as_u16()));
        }
        response
            .json::<ResponseModel>()
            .await
            .map_err(|err| ModelClientError::ResponseJson(err.without_url().to_string()))
    }
}
