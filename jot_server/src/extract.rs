use axum::extract::{
    FromRequest, FromRequestParts,
    rejection::{JsonRejection, PathRejection},
};
use tracing::debug;

use crate::errors::ApiError;

pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_NOTE_ID: &str = "Invalid note ID";

/// JSON request body whose rejections are rendered like every other error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

/// Path parameters whose rejections are rendered like every other error.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("rejected request body: {rejection}");
        Self::Validation(INVALID_BODY)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!("rejected path: {rejection}");
        Self::Validation(INVALID_NOTE_ID)
    }
}
