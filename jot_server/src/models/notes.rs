use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use jot::{Note, UpdateNoteRequest};
use uuid::Uuid;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NoteRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub user_id: String,
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        let NoteRecord {
            id,
            created_at,
            updated_at,
            title,
            content,
            summary,
            user_id,
        } = record;
        Self {
            id,
            title,
            content,
            summary,
            created_at,
            updated_at,
            user_id,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns to change on update. `None` leaves a column untouched.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NoteChangeset {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl NoteChangeset {
    pub fn new(changes: UpdateNoteRequest, updated_at: DateTime<Utc>) -> Self {
        let UpdateNoteRequest {
            title,
            content,
            summary,
        } = changes;
        Self {
            title,
            content,
            summary,
            updated_at,
        }
    }
}
