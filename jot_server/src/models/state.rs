use crate::{client::ModelClient, models::config::ServerConfig, store::NoteStoreHandle};

#[derive(Clone)]
pub struct JotState {
    pub server_config: ServerConfig,
    pub model_client: ModelClient,
    /// Store used for requests made on behalf of a user.
    pub notes: NoteStoreHandle,
    /// Privileged store used for summary write-back.
    pub service_notes: NoteStoreHandle,
}
