use serde::Deserialize;

use crate::{models::client::HttpClientConfig, utils};

#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "utils::default_server_binding_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: utils::default_server_binding_addr(),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    Postgres {
        /// Connection used for requests made on behalf of a user.
        #[serde(deserialize_with = "utils::deserialize_with_envsubst")]
        url: String,
        /// Privileged connection used only for writing summaries back onto
        /// notes. Falls back to `url`.
        #[serde(default, deserialize_with = "utils::deserialize_option_with_envsubst")]
        service_url: Option<String>,
    },
    Memory,
}

#[derive(Clone, Deserialize)]
pub struct JotConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub summarization: HttpClientConfig,
}
