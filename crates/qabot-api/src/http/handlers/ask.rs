//! Question endpoint.
//!
//! POST /api/v1/ask - Answer one question and persist the pair.
//!
//! A failed generation still returns 200: the answer text is the error
//! message and `outcome.status` is `generation_failed`. Only a store failure
//! (or a malformed body) produces an error envelope.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use qabot_types::qa::AnswerOutcome;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, new_request_id};
use crate::state::AppState;

/// Request body for the question endpoint.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Answer payload returned inside the envelope.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    pub outcome: AnswerOutcome,
    pub persisted: bool,
}

/// POST /api/v1/ask - Answer a question.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AskResponse>>, AppError> {
    let start = Instant::now();
    let request_id = new_request_id();

    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let answer = state.qa_service.ask(&body.question).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let payload = AskResponse {
        question: body.question,
        answer: answer.text,
        outcome: answer.outcome,
        persisted: answer.persisted,
    };

    Ok(Json(ApiResponse::success(payload, request_id, elapsed)))
}
