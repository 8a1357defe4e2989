use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identifier used by clients to reference a note that doesn't exist yet.
pub const NEW_NOTE_ID: &str = "new";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Note {
    /// Unique note ID assigned by the server.
    pub id: Uuid,
    /// Note title.
    pub title: String,
    /// Note content.
    pub content: String,
    /// Most recent generated summary of the note's content, if any.
    pub summary: Option<String>,
    /// Datetime the note was created in ISO format.
    pub created_at: DateTime<Utc>,
    /// Datetime the note was last changed in ISO format.
    pub updated_at: DateTime<Utc>,
    /// Owner of the note.
    pub user_id: String,
}

#[derive(Builder, Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct NewNoteRequest {
    /// Note title. Must not be blank.
    pub title: String,
    /// Note content.
    #[serde(default)]
    #[builder(default)]
    pub content: String,
    /// Optional summary to store alongside the note.
    pub summary: Option<String>,
}

/// Partial note update. Fields that are left out aren't changed. An explicit
/// `null` summary clears it.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// New note title. Must not be blank if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New note content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New note summary.
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub summary: Option<Option<String>>,
}

impl UpdateNoteRequest {
    /// Change only the summary of a note.
    pub fn with_summary(summary: String) -> Self {
        Self {
            summary: Some(Some(summary)),
            ..Default::default()
        }
    }
}

// Distinguishes a missing field from an explicit `null`.
fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    /// Text to summarize. Required and must not be empty.
    #[serde(default)]
    pub text: Option<String>,
    /// Note to store the summary on once it's generated.
    #[serde(default)]
    pub note_id: Option<String>,
}

/// What happened to a generated summary after it was returned by the model.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WriteBack {
    /// No note was given, so nothing was stored.
    Skipped,
    /// The summary was stored on the note.
    Persisted,
    /// The summary was delivered but couldn't be stored on the note.
    Failed,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    /// Generated summary.
    pub summary: String,
    /// Outcome of storing the summary on its note.
    pub write_back: WriteBack,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_summary_null_vs_missing() {
        let missing: UpdateNoteRequest = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(missing.summary, None);

        let cleared: UpdateNoteRequest = serde_json::from_str(r#"{"summary":null}"#).unwrap();
        assert_eq!(cleared.summary, Some(None));

        let set: UpdateNoteRequest = serde_json::from_str(r#"{"summary":"S"}"#).unwrap();
        assert_eq!(set.summary, Some(Some("S".to_string())));
    }

    #[test]
    fn summarize_request_uses_camel_case() {
        let request: SummarizeRequest =
            serde_json::from_str(r#"{"text":"hello","noteId":null}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("hello"));
        assert_eq!(request.note_id, None);

        let response = SummarizeResponse {
            summary: "- hello".to_string(),
            write_back: WriteBack::Skipped,
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["writeBack"], "skipped");
    }
}
