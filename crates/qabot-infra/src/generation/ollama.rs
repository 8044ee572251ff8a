//! OllamaGenerationClient -- concrete [`GenerationClient`] for `/api/generate`.
//!
//! POSTs `{model, prompt, max_tokens}` as JSON and reads the response body
//! as newline-delimited JSON fragments. No timeout is configured: a stalled
//! endpoint keeps the stream pending until the peer closes the connection.

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use qabot_core::generation::client::{FragmentStream, GenerationClient};
use qabot_types::generation::{GenerationError, GenerationRequest};

use super::ndjson::{LineDecoder, parse_fragment};

/// Generation client for Ollama-style streaming endpoints.
#[derive(Debug, Clone)]
pub struct OllamaGenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OllamaGenerationClient {
    /// Create a client that POSTs to `endpoint` (the full `/api/generate` URL).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GenerationClient for OllamaGenerationClient {
    fn name(&self) -> &str {
        "ollama"
    }

    fn generate(&self, request: GenerationRequest) -> FragmentStream {
        create_fragment_stream(self.client.clone(), self.endpoint.clone(), request)
    }
}

/// Build the lazy request-and-decode stream for one generation call.
fn create_fragment_stream(
    client: reqwest::Client,
    url: String,
    body: GenerationRequest,
) -> FragmentStream {
    Box::pin(async_stream::try_stream! {
        debug!(url = %url, model = %body.model, max_tokens = body.max_tokens, "sending generation request");

        let response = client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let response = ensure_success(response).await?;

        let mut chunks = std::pin::pin!(response.bytes_stream());
        let mut decoder = LineDecoder::new();

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| GenerationError::Body(e.to_string()))?;
            for line in decoder.push(&chunk) {
                yield parse_fragment(&line)?;
            }
        }

        if let Some(line) = decoder.finish() {
            yield parse_fragment(&line)?;
        }
    })
}

/// Turn a non-2xx response into [`GenerationError::Status`], keeping the body text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GenerationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GenerationError::Status {
        status: status.as_u16(),
        body,
    })
}
