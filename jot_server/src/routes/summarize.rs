use axum::{body::Bytes, extract::State, response::Json};
use jot::{ErrorResponse, SummarizeRequest, SummarizeResponse, WriteBack};
use tracing::{debug, error, warn};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    auth::BearerToken,
    errors::{ApiError, UNKNOWN_ERROR},
    models::state::JotState,
};

const TEXT_REQUIRED: &str = "Text is required";

pub fn router(state: JotState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(summarize))
        .with_state(state)
}

/// Summarize text into a few bullet points.
///
/// If a note ID is given, the summary is also stored on that note. Storing
/// is best-effort: the summary is returned even when it can't be stored,
/// and `writeBack` reports what happened.
#[utoipa::path(
    post,
    path = "/api/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Successfully summarized text", body = SummarizeResponse),
        (status = 400, description = "Text is missing or empty", body = ErrorResponse),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse),
        (status = 500, description = "Error when summarizing the text", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn summarize(
    State(state): State<JotState>,
    owner: BearerToken,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let request: SummarizeRequest = serde_json::from_slice(&body).map_err(|err| {
        error!("unreadable summarize request: {err}");
        ApiError::Unknown(UNKNOWN_ERROR)
    })?;
    let SummarizeRequest { text, note_id } = request;
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::Validation(TEXT_REQUIRED)),
    };

    debug!("summarizing {} bytes of text", text.len());
    let summary = state.model_client.summarize(&text).await.map_err(|err| {
        warn!("error summarizing text: {err}");
        ApiError::Upstream(err)
    })?;

    let write_back = match note_id.filter(|note_id| !note_id.is_empty()) {
        Some(note_id) => write_back(&state, &owner, &note_id, &summary).await,
        None => WriteBack::Skipped,
    };
    Ok(Json(SummarizeResponse {
        summary,
        write_back,
    }))
}

/// Store a summary on its note. Failures are logged and reported through the
/// returned outcome rather than failing the request.
async fn write_back(
    state: &JotState,
    owner: &BearerToken,
    note_id: &str,
    summary: &str,
) -> WriteBack {
    let id = match Uuid::parse_str(note_id) {
        Ok(id) => id,
        Err(err) => {
            error!("error updating note {note_id} with summary: {err}");
            return WriteBack::Failed;
        }
    };
    match state
        .service_notes
        .write_summary(owner.as_str(), id, summary.to_string())
        .await
    {
        Ok(_) => {
            debug!("stored summary on note {id}");
            WriteBack::Persisted
        }
        Err(err) => {
            error!("error updating note {id} with summary: {err}");
            WriteBack::Failed
        }
    }
}
