//! Practice answering endpoint.
//!
//! Evaluation is stateless; the celebration decision needs the running
//! per-flashcard session, which is kept server-side and keyed by an
//! anonymous session cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};

use crate::practice::{evaluate, UserAnswer};
use crate::session::{generate_session_id, get_session, update_session};
use crate::state::AppState;

use super::ApiError;

pub const PRACTICE_COOKIE_NAME: &str = "practice_session";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub category_id: String,
    pub flashcard_id: String,
    pub question_id: String,
    pub answer: UserAnswer,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// True exactly once per flashcard run, when the last remaining
    /// question is answered correctly
    pub celebration: bool,
}

/// POST /api/practice/answer
pub async fn submit_answer(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<AnswerRequest>,
) -> Result<(CookieJar, Json<AnswerResponse>), ApiError> {
    let flashcard = state
        .catalog
        .flashcard(&request.category_id, &request.flashcard_id)
        .ok_or_else(|| ApiError::NotFound(format!("Flashcard '{}'", request.flashcard_id)))?;
    let question = flashcard
        .practice
        .iter()
        .find(|q| q.id == request.question_id)
        .ok_or_else(|| ApiError::NotFound(format!("Question '{}'", request.question_id)))?;

    let correct = evaluate(question, &request.answer);

    let session_id = jar
        .get(PRACTICE_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .unwrap_or_else(generate_session_id);

    let mut session = get_session(&session_id, &request.flashcard_id, flashcard.practice.len());
    if session.flashcard_id() != request.flashcard_id {
        session.reset_for(&request.flashcard_id, flashcard.practice.len());
    }
    let celebration = session.record_answer(&request.question_id, correct);
    update_session(&session_id, session);

    let jar = jar.add(Cookie::build((PRACTICE_COOKIE_NAME, session_id)).path("/"));

    Ok((
        jar,
        Json(AnswerResponse {
            correct,
            explanation: question.explanation.clone(),
            celebration,
        }),
    ))
}
