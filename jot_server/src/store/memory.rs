use async_trait::async_trait;
use chrono::Utc;
use jot::{NewNoteRequest, Note, UpdateNoteRequest};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{NoteStore, StoreError};

/// Notes kept in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: RwLock<HashMap<Uuid, Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn list(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        if owner.is_empty() {
            return Ok(vec![]);
        }
        let notes = self.notes.read().await;
        let mut owned: Vec<Note> = notes
            .values()
            .filter(|note| note.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    async fn get(&self, owner: &str, id: Uuid) -> Result<Note, StoreError> {
        let notes = self.notes.read().await;
        notes
            .get(&id)
            .filter(|note| note.user_id == owner)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, owner: &str, note: NewNoteRequest) -> Result<Note, StoreError> {
        let NewNoteRequest {
            title,
            content,
            summary,
        } = note;
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title,
            content,
            summary,
            created_at: now,
            updated_at: now,
            user_id: owner.to_string(),
        };
        self.notes.write().await.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(
        &self,
        owner: &str,
        id: Uuid,
        changes: UpdateNoteRequest,
    ) -> Result<Note, StoreError> {
        let mut notes = self.notes.write().await;
        let note = notes
            .get_mut(&id)
            .filter(|note| note.user_id == owner)
            .ok_or(StoreError::NotFound)?;
        let UpdateNoteRequest {
            title,
            content,
            summary,
        } = changes;
        if let Some(title) = title {
            note.title = title;
        }
        if let Some(content) = content {
            note.content = content;
        }
        if let Some(summary) = summary {
            note.summary = summary;
        }
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    async fn delete(&self, owner: &str, id: Uuid) -> Result<(), StoreError> {
        let mut notes = self.notes.write().await;
        match notes.get(&id) {
            Some(note) if note.user_id == owner => {
                notes.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }
}
