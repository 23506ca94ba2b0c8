//! JSON API handlers.

pub mod catalog;
pub mod practice;
pub mod progress;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::progress::ProgressError;
use crate::state::AppState;

pub use catalog::{get_category, get_flashcard, list_categories};
pub use practice::submit_answer;
pub use progress::{category_progress, complete_flashcard, get_progress, get_streaks};

/// API error mapped to a status code and a JSON message body
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Storage,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(what) => write!(f, "{} not found", what),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Unauthorized => write!(f, "Sign-in required"),
            ApiError::Storage => write!(f, "Storage unavailable"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProgressError> for ApiError {
    fn from(e: ProgressError) -> Self {
        tracing::error!("Progress storage failure: {}", e);
        ApiError::Storage
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Storage => StatusCode::SERVICE_UNAVAILABLE,
        };
        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{category_id}", get(get_category))
        .route(
            "/api/flashcards/{category_id}/{flashcard_id}",
            get(get_flashcard),
        )
        .route("/api/practice/answer", post(submit_answer))
        .route("/api/progress", get(get_progress))
        .route("/api/progress/{category_id}", get(category_progress))
        .route("/api/progress/complete", post(complete_flashcard))
        .route("/api/streaks", get(get_streaks))
        .with_state(state)
}
