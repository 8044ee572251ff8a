//! Generation endpoint types for qabot.
//!
//! These types model the wire shapes of the remote text-generation service:
//! the JSON request body, the newline-delimited JSON fragments of the
//! streamed response, and the error taxonomy of a generation call.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Request body POSTed to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    /// Maximum-length hint forwarded to the service.
    pub max_tokens: u32,
}

/// One line-delimited JSON object from the streamed response body.
///
/// Both fields are optional on the wire. Unknown fields are ignored, but a
/// recognized field with the wrong type (e.g. `"response": null`) fails to
/// parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Text increment to append to the answer.
    #[serde(default)]
    pub response: String,
    /// Completion flag: no further fragments follow once this is true.
    #[serde(default)]
    pub done: bool,
}

impl Fragment {
    /// Parse a single fragment line.
    pub fn parse(line: &str) -> Result<Self, GenerationError> {
        serde_json::from_str(line).map_err(|e| GenerationError::Parse {
            line: line.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Coarse classification of a [`GenerationError`], for callers that branch
/// on the failure without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationErrorKind {
    Transport,
    Status,
    Parse,
    Body,
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationErrorKind::Transport => write!(f, "transport"),
            GenerationErrorKind::Status => write!(f, "status"),
            GenerationErrorKind::Parse => write!(f, "parse"),
            GenerationErrorKind::Body => write!(f, "body"),
        }
    }
}

/// Errors from a generation call.
///
/// The `Display` form of every variant starts with `"Error:"` because it is
/// shown to the user in place of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Error: request to generation endpoint failed: {0}")]
    Transport(String),

    #[error("Error: generation endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Error: malformed fragment {line:?}: {reason}")]
    Parse { line: String, reason: String },

    #[error("Error: failed to read response body: {0}")]
    Body(String),
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::Transport(_) => GenerationErrorKind::Transport,
            GenerationError::Status { .. } => GenerationErrorKind::Status,
            GenerationError::Parse { .. } => GenerationErrorKind::Parse,
            GenerationError::Body(_) => GenerationErrorKind::Body,
        }
    }
}
