use async_trait::async_trait;
use jot::{NewNoteRequest, Note, UpdateNoteRequest};
use std::sync::Arc;
use uuid::Uuid;

mod memory;
mod pg;

pub use memory::MemoryNoteStore;
pub use pg::PgNoteStore;

pub type NoteStoreHandle = Arc<dyn NoteStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("note not found")]
    NotFound,
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Typed access to notes, always scoped to the owner that is passed in.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes owned by `owner`, most recently updated first. An empty
    /// owner has no notes.
    async fn list(&self, owner: &str) -> Result<Vec<Note>, StoreError>;

    async fn get(&self, owner: &str, id: Uuid) -> Result<Note, StoreError>;

    /// Store a new note. Both timestamps are set to the same instant.
    async fn create(&self, owner: &str, note: NewNoteRequest) -> Result<Note, StoreError>;

    /// Merge the given fields into a note and refresh `updated_at`.
    async fn update(
        &self,
        owner: &str,
        id: Uuid,
        changes: UpdateNoteRequest,
    ) -> Result<Note, StoreError>;

    async fn delete(&self, owner: &str, id: Uuid) -> Result<(), StoreError>;

    /// Overwrite a note's summary, leaving its title and content alone.
    async fn write_summary(
        &self,
        owner: &str,
        id: Uuid,
        summary: String,
    ) -> Result<Note, StoreError> {
        self.update(owner, id, UpdateNoteRequest::with_summary(summary)).await
    }
}
