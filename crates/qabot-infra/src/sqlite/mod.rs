//! SQLite storage layer.
//!
//! Answer store backed by SQLite in WAL mode behind an explicitly
//! constructed connection pool.

pub mod answer;
pub mod pool;
