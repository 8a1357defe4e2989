use axum::{extract::State, http::StatusCode, response::Json};
use jot::{ErrorResponse, NewNoteRequest, Note, UpdateNoteRequest};
use tracing::debug;
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    auth::BearerToken,
    errors::ApiError,
    extract::{self, Path},
    models::state::JotState,
};

const TITLE_REQUIRED: &str = "Title is required";

pub fn router(state: JotState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_notes, add_note))
        .routes(routes!(get_note, update_note, delete_note))
        .with_state(state)
}

/// List all notes owned by the caller, most recently updated first.
#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "Successfully listed notes", body = [Note]),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<JotState>,
    owner: BearerToken,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list(owner.as_str()).await?;
    Ok(Json(notes))
}

/// Add and return a note.
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NewNoteRequest,
    responses(
        (status = 201, description = "Successfully added a note", body = Note),
        (status = 400, description = "Blank title or invalid body", body = ErrorResponse),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn add_note(
    State(state): State<JotState>,
    owner: BearerToken,
    extract::Json(body): extract::Json<NewNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation(TITLE_REQUIRED));
    }
    let note = state.notes.create(owner.as_str(), body).await?;
    debug!("added note {}", note.id);
    Ok((StatusCode::CREATED, Json(note)))
}

/// Get a note by its ID.
#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "ID of the note to get"),
    ),
    responses(
        (status = 400, description = "Invalid note ID", body = ErrorResponse),
        (status = 200, description = "Successfully got note", body = Note),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_note(
    State(state): State<JotState>,
    owner: BearerToken,
    Path(id): Path<Uuid>,
) -> Result<Json<Note>, ApiError> {
    let note = state.notes.get(owner.as_str(), id).await?;
    Ok(Json(note))
}

/// Update some or all of a note's fields and return the updated note.
#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "ID of the note to update"),
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Successfully updated note", body = Note),
        (status = 400, description = "Blank title, invalid body or note ID", body = ErrorResponse),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_note(
    State(state): State<JotState>,
    owner: BearerToken,
    Path(id): Path<Uuid>,
    extract::Json(body): extract::Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    if body.title.as_ref().is_some_and(|title| title.trim().is_empty()) {
        return Err(ApiError::Validation(TITLE_REQUIRED));
    }
    let note = state.notes.update(owner.as_str(), id, body).await?;
    debug!("updated note {id}");
    Ok(Json(note))
}

/// Permanently delete a note.
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "ID of the note to delete"),
    ),
    responses(
        (status = 400, description = "Invalid note ID", body = ErrorResponse),
        (status = 204, description = "Successfully deleted note"),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<JotState>,
    owner: BearerToken,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.notes.delete(owner.as_str(), id).await?;
    debug!("deleted note {id}");
    Ok(StatusCode::NO_CONTENT)
}
