//! HTTP layer for qabot.
//!
//! Axum-based web UI at `/` and JSON API at `/api/v1/`, with envelope
//! response format and CORS support.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
