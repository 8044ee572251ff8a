//! Runtime configuration types for qabot.
//!
//! `QaConfig` represents the `config.toml` in the data directory. Every
//! field has a default, so an empty or missing file yields a working setup
//! pointed at the public generation endpoint.

use serde::{Deserialize, Serialize};

use crate::generation::GenerationRequest;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaConfig {
    /// URL the generation request is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum-length hint sent with every request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Store the error text as the answer when generation fails.
    #[serde(default = "default_persist_failures")]
    pub persist_failures: bool,

    /// Address the web UI binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,
}

fn default_endpoint() -> String {
    "https://llm.kryptomind.net/api/generate".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_max_tokens() -> u32 {
    100
}

fn default_persist_failures() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_database_file() -> String {
    "qa_database.db".to_string()
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            persist_failures: default_persist_failures(),
            host: default_host(),
            port: default_port(),
            database_file: default_database_file(),
        }
    }
}

impl QaConfig {
    /// Build the generation request for a question.
    pub fn generation_request(&self, question: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            prompt: question.to_string(),
            max_tokens: self.max_tokens,
        }
    }
}
