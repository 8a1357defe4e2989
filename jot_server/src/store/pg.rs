use async_trait::async_trait;
use chrono::Utc;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use jot::{NewNoteRequest, Note, UpdateNoteRequest};
use uuid::Uuid;

use crate::{
    models::notes::{NewNote, NoteChangeset, NoteRecord},
    schema,
    store::{NoteStore, StoreError},
    utils,
};

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound,
            err => Self::backend(err),
        }
    }
}

/// Notes stored in Postgres.
pub struct PgNoteStore {
    pool: utils::Pool,
}

impl PgNoteStore {
    pub fn new(pool: utils::Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn list(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        if owner.is_empty() {
            return Ok(vec![]);
        }
        let mut conn = self.pool.get().await.map_err(StoreError::backend)?;
        let records = schema::notes::table
            .select(NoteRecord::as_select())
            .filter(schema::notes::user_id.eq(owner))
            .order(schema::notes::updated_at.desc())
            .load(&mut conn)
            .await?;
        Ok(records.into_iter().map(Note::from).collect())
    }

    async fn get(&self, owner: &str, id: Uuid) -> Result<Note, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::backend)?;
        let record = schema::notes::table
            .select(NoteRecord::as_select())
            .filter(schema::notes::id.eq(id))
            .filter(schema::notes::user_id.eq(owner))
            .first(&mut conn)
            .await?;
        Ok(record.into())
    }

    async fn create(&self, owner: &str, note: NewNoteRequest) -> Result<Note, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::backend)?;
        let NewNoteRequest {
            title,
            content,
            summary,
        } = note;
        let now = Utc::now();
        let new_note = NewNote {
            title,
            content,
            summary,
            user_id: owner.to_string(),
            created_at: now,
            updated_at: now,
        };
        let record = diesel::insert_into(schema::notes::table)
            .values(new_note)
            .returning(NoteRecord::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(record.into())
    }

    async fn update(
        &self,
        owner: &str,
        id: Uuid,
        changes: UpdateNoteRequest,
    ) -> Result<Note, StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::backend)?;
        let changeset = NoteChangeset::new(changes, Utc::now());
        let record = diesel::update(schema::notes::table)
            .filter(schema::notes::id.eq(id))
            .filter(schema::notes::user_id.eq(owner))
            .set(changeset)
            .returning(NoteRecord::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(record.into())
    }

    async fn delete(&self, owner: &str, id: Uuid) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(StoreError::backend)?;
        let deleted = diesel::delete(schema::notes::table)
            .filter(schema::notes::id.eq(id))
            .filter(schema::notes::user_id.eq(owner))
            .execute(&mut conn)
            .await?;
        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
