//! Infrastructure layer for qabot.
//!
//! Contains implementations of the port traits defined in `qabot-core`:
//! the streaming HTTP generation client, SQLite answer storage, and the
//! configuration/data-directory loaders used by the binary.

pub mod config;
pub mod generation;
pub mod sqlite;
