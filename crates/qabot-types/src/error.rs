use thiserror::Error;

/// Errors from repository operations (used by trait definitions in qabot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the interaction handler.
///
/// Generation failures are not errors at this level: they come back as an
/// [`Answer`](crate::qa::Answer) with a failed outcome. Only the store can
/// make a question fail outright.
#[derive(Debug, Error)]
pub enum QaError {
    #[error("failed to save QA record: {0}")]
    Store(#[from] RepositoryError),
}
