//! Database pool for the answer store, in WAL mode.
//!
//! The store only ever appends, so a single-connection writer pool is all
//! that is needed. Writes from concurrent requests are serialized by the pool.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Writer pool for SQLite with WAL mode.
///
/// Constructed explicitly and handed to the store; call [`close`](Self::close)
/// on shutdown to release the connection.
#[derive(Clone)]
pub struct DatabasePool {
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open the database and run migrations.
    ///
    /// Uses WAL journal mode and a 5-second busy timeout. The file is created
    /// if missing.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;

        Ok(Self { writer })
    }

    /// Close the pool, waiting for in-flight writes to finish.
    pub async fn close(&self) {
        self.writer.close().await;
    }
}

/// Build the `sqlite://` URL for a database file inside `data_dir`.
pub fn database_url(data_dir: &Path, database_file: &str) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        data_dir.join(database_file).display()
    )
}
