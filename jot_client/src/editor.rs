use jot::{NEW_NOTE_ID, NewNoteRequest, Note, SummarizeResponse, UpdateNoteRequest, WriteBack};
use uuid::Uuid;

use crate::{errors::ClientError, store::NotesStore};

#[derive(Clone, Debug, PartialEq)]
pub enum EditorState {
    Loading,
    /// Editing a note that hasn't been saved yet.
    New,
    Editing,
    Saving,
    Error(String),
    Deleting,
    Deleted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A dismissible message for the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn info(title: &str, description: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn error(title: &str, description: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Edits a single note: loading it, saving changes, summarizing its
/// content, and deleting it.
///
/// Requests borrow the editor mutably, so a pending summary blocks any other
/// request from the same editor until it finishes or is dropped.
pub struct NoteEditor {
    store: NotesStore,
    id: Option<Uuid>,
    title: String,
    content: String,
    summary: Option<String>,
    state: EditorState,
    notices: Vec<Notice>,
}

impl NoteEditor {
    /// Open the note with the given ID. The `new` ID starts from an empty
    /// note without asking the server for anything.
    pub async fn open(store: NotesStore, id: &str) -> Result<Self, ClientError> {
        let mut editor = Self {
            store,
            id: None,
            title: String::new(),
            content: String::new(),
            summary: None,
            state: EditorState::Loading,
            notices: vec![],
        };
        if id == NEW_NOTE_ID {
            editor.state = EditorState::New;
            return Ok(editor);
        }

        let id = Uuid::parse_str(id).map_err(|_| ClientError::NotFound)?;
        match editor.store.get(id).await? {
            Some(note) => {
                editor.load(note);
                Ok(editor)
            }
            None => Err(ClientError::NotFound),
        }
    }

    fn load(&mut self, note: Note) {
        self.id = Some(note.id);
        self.title = note.title;
        self.content = note.content;
        self.summary = note.summary;
        self.state = EditorState::Editing;
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Pending notices, oldest first. Taking them dismisses them.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Save the note, creating it if it's new. Returns the ID of the saved
    /// note, which is newly assigned on create.
    pub async fn save(&mut self) -> Result<Uuid, ClientError> {
        if self.title.trim().is_empty() {
            self.notices.push(Notice::error(
                "Title required",
                "Please enter a title for your note.",
            ));
            return Err(ClientError::Validation("Title is required"));
        }

        let creating = self.id.is_none();
        self.state = EditorState::Saving;
        let result = match self.id {
            None => {
                let note = NewNoteRequest {
                    title: self.title.clone(),
                    content: self.content.clone(),
                    summary: self.summary.clone(),
                };
                self.store.create(note).await
            }
            Some(id) => {
                let changes = UpdateNoteRequest {
                    title: Some(self.title.clone()),
                    content: Some(self.content.clone()),
                    summary: Some(self.summary.clone()),
                };
                self.store.update(id, changes).await
            }
        };

        match result {
            Ok(note) => {
                let id = note.id;
                if creating {
                    self.notices.push(Notice::info(
                        "Note created",
                        "Your note has been created successfully.",
                    ));
                } else {
                    self.notices.push(Notice::info(
                        "Note updated",
                        "Your note has been updated successfully.",
                    ));
                }
                self.load(note);
                Ok(id)
            }
            Err(err) => {
                self.notices
                    .push(Notice::error("Error saving note", &err.to_string()));
                self.state = EditorState::Error(err.to_string());
                Err(err)
            }
        }
    }

    /// Whether a summary can be requested right now.
    pub fn can_summarize(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Summarize the note's current content. Saved notes also get the
    /// summary stored on them by the server.
    pub async fn summarize(&mut self) -> Result<SummarizeResponse, ClientError> {
        if self.content.trim().is_empty() {
            self.notices.push(Notice::error(
                "Empty content",
                "Please add some content to summarize.",
            ));
            return Err(ClientError::Validation("Content is required"));
        }

        match self.store.summarize(&self.content, self.id).await {
            Ok(response) => {
                self.summary = Some(response.summary.clone());
                self.notices.push(Notice::info(
                    "Summary generated",
                    "Your note has been summarized successfully.",
                ));
                if response.write_back == WriteBack::Failed {
                    self.notices.push(Notice::error(
                        "Summary not saved",
                        "The summary couldn't be stored on your note. Save the note to keep it.",
                    ));
                }
                Ok(response)
            }
            Err(err) => {
                self.notices
                    .push(Notice::error("Summarization failed", &err.to_string()));
                Err(err)
            }
        }
    }

    /// Permanently delete the note once `confirm` agrees to it. Returns
    /// whether the note was deleted.
    pub async fn delete<F>(&mut self, confirm: F) -> Result<bool, ClientError>
    where
        F: FnOnce() -> bool,
    {
        let Some(id) = self.id else {
            return Ok(false);
        };
        if !confirm() {
            return Ok(false);
        }

        self.state = EditorState::Deleting;
        match self.store.delete(id).await {
            Ok(()) => {
                self.state = EditorState::Deleted;
                self.notices.push(Notice::info(
                    "Note deleted",
                    "Your note has been deleted successfully.",
                ));
                Ok(true)
            }
            Err(err) => {
                self.notices
                    .push(Notice::error("Error deleting note", &err.to_string()));
                self.state = EditorState::Error(err.to_string());
                Err(err)
            }
        }
    }
}
