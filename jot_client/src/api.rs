use jot::{NewNoteRequest, Note, SummarizeRequest, SummarizeResponse, UpdateNoteRequest};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::ClientError;

/// HTTP client for the notes server. Every request carries the bearer token
/// the client was made with.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches("/").to_string(),
            token: token.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let request = self.client.get(self.url("/api/notes"));
        self.send_json(request).await
    }

    /// Get a note, or `None` if the server doesn't know it.
    pub async fn get_note(&self, id: Uuid) -> Result<Option<Note>, ClientError> {
        let request = self.client.get(self.url(&format!("/api/notes/{id}")));
        match self.send_json(request).await {
            Ok(note) => Ok(Some(note)),
            Err(ClientError::Api { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn create_note(&self, note: &NewNoteRequest) -> Result<Note, ClientError> {
        let request = self.client.post(self.url("/api/notes")).json(note);
        self.send_json(request).await
    }

    pub async fn update_note(
        &self,
        id: Uuid,
        changes: &UpdateNoteRequest,
    ) -> Result<Note, ClientError> {
        let request = self
            .client
            .put(self.url(&format!("/api/notes/{id}")))
            .json(changes);
        self.send_json(request).await
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<(), ClientError> {
        let request = self.client.delete(self.url(&format!("/api/notes/{id}")));
        self.send(request).await?;
        Ok(())
    }

    pub async fn summarize(
        &self,
        text: &str,
        note_id: Option<Uuid>,
    ) -> Result<SummarizeResponse, ClientError> {
        let body = SummarizeRequest {
            text: Some(text.to_string()),
            note_id: note_id.map(|id| id.to_string()),
        };
        let request = self.client.post(self.url("/api/summarize")).json(&body);
        self.send_json(request).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ClientError::Connection)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, response).await,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(ClientError::Response)
    }
}

// Prefer the server's `{"error": ...}` message over the bare status.
async fn error_message(status: StatusCode, response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<jot::ErrorResponse>(&body)
        .map(|err| err.error)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                status.to_string()
            } else {
                body
            }
        })
}
