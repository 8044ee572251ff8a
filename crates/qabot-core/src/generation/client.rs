//! GenerationClient trait definition.
//!
//! The producer half of answer assembly: a client turns one request into a
//! finite stream of parsed fragments. The stream is boxed (not RPITIT) so
//! that it can be held and passed around without naming the concrete type.

use std::pin::Pin;

use futures_util::Stream;

use qabot_types::generation::{Fragment, GenerationError, GenerationRequest};

/// Stream of parsed fragments for a single generation request.
pub type FragmentStream =
    Pin<Box<dyn Stream<Item = Result<Fragment, GenerationError>> + Send + 'static>>;

/// Trait for remote text-generation backends.
///
/// Implementations live in qabot-infra (e.g., `OllamaGenerationClient`).
pub trait GenerationClient: Send + Sync {
    /// Human-readable backend name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Issue one generation request and stream back its fragments.
    ///
    /// The request is sent when the stream is first polled. Transport and
    /// status failures surface as the first item; a parse or body failure
    /// ends the stream after the fragments that preceded it.
    fn generate(&self, request: GenerationRequest) -> FragmentStream;
}
