//! AnswerStore trait definition.
//!
//! Append-only persistence for QA records. No reads, no updates, no dedup.

use qabot_types::error::RepositoryError;
use qabot_types::qa::QaRecord;

/// Repository trait for QA record persistence.
///
/// Implementations live in qabot-infra (e.g., `SqliteAnswerStore`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait AnswerStore: Send + Sync {
    /// Append exactly one record. Appending the same pair twice stores two
    /// records.
    fn append(
        &self,
        record: &QaRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
