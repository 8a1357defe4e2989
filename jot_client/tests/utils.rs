#![allow(dead_code)]

use chrono::{DateTime, Utc};
use jot::Note;
use jot_client::{api::ApiClient, store::NotesStore};
use uuid::Uuid;
use wiremock::MockServer;

pub const TOKEN: &str = "alice";

pub fn note(title: &str, content: &str, summary: Option<&str>) -> Note {
    let now: DateTime<Utc> = Utc::now();
    Note {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        summary: summary.map(str::to_string),
        created_at: now,
        updated_at: now,
        user_id: TOKEN.to_string(),
    }
}

pub fn store(server: &MockServer) -> NotesStore {
    NotesStore::new(ApiClient::new(&server.uri(), TOKEN), TOKEN)
}
