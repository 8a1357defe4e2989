use std::fs::File;
use std::sync::Arc;

use axum::{Router, middleware};
use diesel::{Connection, PgConnection};
use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa_axum::router::OpenApiRouter;

pub mod auth;
pub mod client;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod schema;
pub mod store;
mod utils;

use models::{
    config::{JotConfig, StoreConfig},
    state::JotState,
};
use store::{MemoryNoteStore, NoteStoreHandle, PgNoteStore};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub async fn init() -> Result<JotState, Box<dyn std::error::Error>> {
    // Tests may initialize more than once.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();

    // All configuration comes from environment variables and a required
    // config file.
    let config_path = dotenvy::var("JOT_CONFIG_PATH")?;
    let config_file = File::open(config_path)?;
    let config: JotConfig = serde_json::from_reader(config_file)?;
    build_state(config).await
}

/// Build the shared server state from an already loaded config.
pub async fn build_state(config: JotConfig) -> Result<JotState, Box<dyn std::error::Error>> {
    let JotConfig {
        server,
        store,
        summarization,
    } = config;

    let model_client = client::ModelClient::new(summarization)?;
    let (notes, service_notes): (NoteStoreHandle, NoteStoreHandle) = match store {
        StoreConfig::Postgres { url, service_url } => {
            // Manually run migrations at startup to ensure the database is
            // ready to go.
            let mut conn = PgConnection::establish(&url)?;
            conn.run_pending_migrations(MIGRATIONS)
                .map_err(|err| format!("failed to run migrations: {err}"))?;

            let notes: NoteStoreHandle = Arc::new(PgNoteStore::new(pool(&url).await?));
            let service_notes: NoteStoreHandle = match service_url {
                Some(service_url) if service_url != url => {
                    Arc::new(PgNoteStore::new(pool(&service_url).await?))
                }
                _ => notes.clone(),
            };
            (notes, service_notes)
        }
        StoreConfig::Memory => {
            info!("using in-memory note store");
            let notes: NoteStoreHandle = Arc::new(MemoryNoteStore::new());
            (notes.clone(), notes)
        }
    };

    Ok(JotState {
        server_config: server,
        model_client,
        notes,
        service_notes,
    })
}

async fn pool(url: &str) -> Result<utils::Pool, Box<dyn std::error::Error>> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(url);
    let pool = bb8::Pool::builder().build(manager).await?;
    Ok(pool)
}

/// All API routes along with their OpenAPI docs.
pub fn router(state: JotState) -> OpenApiRouter {
    OpenApiRouter::new()
        .merge(routes::notes::router(state.clone()))
        .merge(routes::summarize::router(state))
}

/// Wrap a router with request tracing and panic recovery.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .layer(middleware::from_fn(errors::summarize_panics))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}
