//! Shared domain types for qabot.
//!
//! This crate contains the types passed between the layers of the question
//! answering front end: the generation request and its streamed fragments,
//! the persisted QA record, the answer handed back to the UI, the runtime
//! configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod generation;
pub mod qa;
