//! HTTP request handlers for the web UI and REST API.

pub mod ask;
pub mod ui;
