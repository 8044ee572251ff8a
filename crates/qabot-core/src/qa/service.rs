//! QA service: the interaction handler between the UI and the backends.
//!
//! One question drives exactly one generation request and at most one store
//! append. A failed generation comes back as an `"Error: ..."` answer; it is
//! stored like a real answer only when `persist_failures` is enabled.

use tracing::{info, warn};

use qabot_types::config::QaConfig;
use qabot_types::error::QaError;
use qabot_types::qa::{Answer, AnswerOutcome, QaRecord};

use crate::generation::assembler::assemble_answer;
use crate::generation::client::GenerationClient;
use crate::qa::store::AnswerStore;

/// Orchestrates generation and persistence for a single question.
///
/// Generic over `GenerationClient` and `AnswerStore` to maintain clean
/// architecture (qabot-core never depends on qabot-infra). Both backends are
/// injected; the service holds no ambient connection state.
pub struct QaService<G: GenerationClient, S: AnswerStore> {
    client: G,
    store: S,
    config: QaConfig,
}

impl<G: GenerationClient, S: AnswerStore> QaService<G, S> {
    /// Create a new service with the given backends and configuration.
    pub fn new(client: G, store: S, config: QaConfig) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    /// Access the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    pub fn config(&self) -> &QaConfig {
        &self.config
    }

    /// Answer a question and persist the pair.
    ///
    /// Only a store failure makes this return `Err`; generation failures are
    /// reported through [`Answer::outcome`].
    #[tracing::instrument(skip(self), fields(client = self.client.name(), model = %self.config.model))]
    pub async fn ask(&self, question: &str) -> Result<Answer, QaError> {
        let request = self.config.generation_request(question);
        let result = assemble_answer(self.client.generate(request)).await;

        let (text, outcome) = match result {
            Ok(text) => (text, AnswerOutcome::Generated),
            Err(e) => {
                warn!(error = %e, kind = %e.kind(), "generation failed");
                let kind = e.kind();
                (e.to_string(), AnswerOutcome::GenerationFailed { kind })
            }
        };

        let persist = match outcome {
            AnswerOutcome::Generated => true,
            AnswerOutcome::GenerationFailed { .. } => self.config.persist_failures,
        };

        if persist {
            let record = QaRecord::new(question, text.as_str());
            self.store.append(&record).await?;
            info!(question = %record.question, answer = %record.answer, "saved QA record");
        }

        Ok(Answer {
            text,
            outcome,
            persisted: persist,
        })
    }
}
