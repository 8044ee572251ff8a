//! SQLite answer store implementation.
//!
//! Implements `AnswerStore` from `qabot-core`. Every append is a plain
//! INSERT: no upsert, no uniqueness constraint, no transaction.

use chrono::Utc;

use qabot_core::qa::store::AnswerStore;
use qabot_types::error::RepositoryError;
use qabot_types::qa::QaRecord;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `AnswerStore`.
#[derive(Clone)]
pub struct SqliteAnswerStore {
    pool: DatabasePool,
}

impl SqliteAnswerStore {
    /// Create a new answer store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => RepositoryError::Connection,
        other => RepositoryError::Query(other.to_string()),
    }
}

impl AnswerStore for SqliteAnswerStore {
    async fn append(&self, record: &QaRecord) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO qa_records (question, answer, created_at) VALUES (?, ?, ?)")
            .bind(&record.question)
            .bind(&record.answer)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
