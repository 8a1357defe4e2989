use jot::{NewNoteRequest, Note, SummarizeResponse, UpdateNoteRequest, WriteBack};
use uuid::Uuid;

use crate::{
    api::ApiClient,
    cache::{Mutation, QueryCache},
    errors::ClientError,
};

/// Notes owned by the signed-in user, read through a cache that's
/// invalidated after every successful write.
pub struct NotesStore {
    api: ApiClient,
    owner: String,
    cache: QueryCache,
}

impl NotesStore {
    pub fn new(api: ApiClient, owner: &str) -> Self {
        Self {
            api,
            owner: owner.to_string(),
            cache: QueryCache::new(),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// All of the owner's notes. An empty owner has no notes and the server
    /// isn't asked.
    pub async fn list(&mut self) -> Result<Vec<Note>, ClientError> {
        if self.owner.is_empty() {
            return Ok(vec![]);
        }
        if let Some(notes) = self.cache.notes(&self.owner) {
            return Ok(notes.to_vec());
        }
        let notes = self.api.list_notes().await?;
        self.cache.put_notes(&self.owner, notes.clone());
        Ok(notes)
    }

    /// Notes whose title or content contains `query`, ignoring case.
    pub async fn search(&mut self, query: &str) -> Result<Vec<Note>, ClientError> {
        let query = query.to_lowercase();
        let notes = self.list().await?;
        Ok(notes
            .into_iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
            })
            .collect())
    }

    pub async fn get(&mut self, id: Uuid) -> Result<Option<Note>, ClientError> {
        if let Some(note) = self.cache.note(id) {
            return Ok(Some(note.clone()));
        }
        let note = self.api.get_note(id).await?;
        if let Some(note) = &note {
            self.cache.put_note(note.clone());
        }
        Ok(note)
    }

    pub async fn create(&mut self, note: NewNoteRequest) -> Result<Note, ClientError> {
        let note = self.api.create_note(&note).await?;
        self.cache.apply(Mutation::Created {
            owner: &note.user_id,
        });
        Ok(note)
    }

    pub async fn update(
        &mut self,
        id: Uuid,
        changes: UpdateNoteRequest,
    ) -> Result<Note, ClientError> {
        let note = self.api.update_note(id, &changes).await?;
        self.cache.apply(Mutation::Updated {
            owner: &note.user_id,
            id,
        });
        Ok(note)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.api.delete_note(id).await?;
        self.cache.apply(Mutation::Deleted {
            owner: &self.owner,
            id,
        });
        Ok(())
    }

    /// Summarize text, storing the result on `note_id` when one is given.
    pub async fn summarize(
        &mut self,
        text: &str,
        note_id: Option<Uuid>,
    ) -> Result<SummarizeResponse, ClientError> {
        let response = self.api.summarize(text, note_id).await?;
        if let (Some(id), WriteBack::Persisted) = (note_id, response.write_back) {
            self.cache.apply(Mutation::SummaryPersisted {
                owner: &self.owner,
                id,
            });
        }
        Ok(response)
    }
}
