//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the web UI. `QaService` is generic over its generation client and answer
//! store; AppState pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use qabot_core::qa::service::QaService;
use qabot_infra::config::{load_config, resolve_data_dir};
use qabot_infra::generation::ollama::OllamaGenerationClient;
use qabot_infra::sqlite::answer::SqliteAnswerStore;
use qabot_infra::sqlite::pool::{DatabasePool, database_url};
use qabot_types::config::QaConfig;

/// Concrete type alias for the service pinned to infra implementations.
pub type ConcreteQaService = QaService<OllamaGenerationClient, SqliteAnswerStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub qa_service: Arc<ConcreteQaService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, load config,
    /// open the database, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let db_url = database_url(&data_dir, &config.database_file);
        let db_pool = DatabasePool::new(&db_url).await?;

        Ok(Self::new(config, data_dir, db_pool))
    }

    /// Wire services from already-acquired resources.
    pub fn new(config: QaConfig, data_dir: PathBuf, db_pool: DatabasePool) -> Self {
        let client = OllamaGenerationClient::new(config.endpoint.clone());
        let store = SqliteAnswerStore::new(db_pool.clone());
        let qa_service = QaService::new(client, store, config);

        Self {
            qa_service: Arc::new(qa_service),
            data_dir,
            db_pool,
        }
    }

    pub fn config(&self) -> &QaConfig {
        self.qa_service.config()
    }

    /// Release the database connection.
    pub async fn shutdown(&self) {
        self.db_pool.close().await;
    }
}
