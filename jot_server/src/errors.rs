use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jot::ErrorResponse;
use std::any::Any;
use tracing::error;

use crate::{models::client::ModelClientError, store::StoreError};

/// Message returned for any failure that isn't safe to describe to callers.
pub const UNKNOWN_ERROR: &str = "An error occurred while summarizing the text";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

const SUMMARIZE_PATH: &str = "/api/summarize";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Validation(&'static str),
    #[error("Note not found")]
    NotFound,
    #[error("Error summarizing text: {0}")]
    Upstream(#[from] ModelClientError),
    #[error("{0}")]
    Unknown(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::Backend(err) => {
                error!("note store failure: {err}");
                Self::Unknown(UNEXPECTED_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Render a panic within a handler as a generic error so internals aren't
/// leaked to callers.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {details}");
    let mut response = ApiError::Unknown(UNEXPECTED_ERROR).into_response();
    response.extensions_mut().insert(HandlerPanicked);
    response
}

/// Marks responses produced by [`panic_response`].
#[derive(Clone, Copy, Debug)]
struct HandlerPanicked;

/// Report panics within the summarize endpoint with its own failure message.
pub async fn summarize_panics(request: Request, next: Next) -> Response {
    let summarizing = request.uri().path() == SUMMARIZE_PATH;
    let response = next.run(request).await;
    if summarizing && response.extensions().get::<HandlerPanicked>().is_some() {
        return ApiError::Unknown(UNKNOWN_ERROR).into_response();
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_messages_are_prefixed() {
        let err = ApiError::from(ModelClientError::ApiStatus(503));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error summarizing text: API error: 503");
    }

    #[test]
    fn backend_store_errors_are_hidden() {
        let err = ApiError::from(StoreError::Backend("password incorrect".to_string()));
        assert_eq!(err.to_string(), UNEXPECTED_ERROR);
    }
}
