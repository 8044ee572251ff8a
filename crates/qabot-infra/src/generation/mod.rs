//! Generation client implementations.
//!
//! Contains the concrete [`GenerationClient`](qabot_core::generation::client::GenerationClient)
//! for Ollama-style `/api/generate` endpoints, which stream their response as
//! newline-delimited JSON, plus the line decoder it is built on.

pub mod ndjson;
pub mod ollama;
