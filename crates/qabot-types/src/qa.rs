//! Question/answer domain types.

use serde::{Deserialize, Serialize};

use crate::generation::GenerationErrorKind;

/// A persisted question/answer pair.
///
/// Carries no identifier: insertion order is the only relationship between
/// records, and two records with identical fields are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// How a generation call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// The stream was assembled into an answer.
    Generated,
    /// The generation call failed; the answer text is the error message.
    GenerationFailed { kind: GenerationErrorKind },
}

/// What the interaction handler hands back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Text to display: the assembled answer, or an `"Error: ..."` message.
    pub text: String,
    pub outcome: AnswerOutcome,
    /// Whether a QA record was appended for this answer.
    pub persisted: bool,
}

impl Answer {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, AnswerOutcome::GenerationFailed { .. })
    }
}
