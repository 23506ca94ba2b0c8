//! Progress and streak endpoints.
//!
//! The storage backend is chosen per request: signed-in users read and
//! write the shared database, anonymous visitors the local file. Streaks
//! only exist for signed-in users.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::{self, try_lock};
use crate::domain::{ProgressRecord, StreakRecord};
use crate::progress::{select_store, CategoryCounts};
use crate::state::{AppState, AuthContext};

use super::ApiError;

/// GET /api/progress - every stored record for the current identity
pub async fn get_progress(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<Vec<ProgressRecord>>, ApiError> {
    let store = select_store(&auth, &state.db, &state.local_progress_path);
    Ok(Json(store.get_all()?))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgressResponse {
    pub category_id: String,
    pub counts: CategoryCounts,
    pub records: Vec<ProgressRecord>,
}

/// GET /api/progress/{category_id} - records and completion counts for
/// one category, measured against the catalog's card total
pub async fn category_progress(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryProgressResponse>, ApiError> {
    let category = state
        .catalog
        .category(&category_id)
        .ok_or_else(|| ApiError::NotFound(format!("Category '{}'", category_id)))?;

    let store = select_store(&auth, &state.db, &state.local_progress_path);
    let counts = store.category_counts(&category_id, category.flashcards.len() as i64)?;
    let records = store
        .get_all()?
        .into_iter()
        .filter(|r| r.category_id == category_id)
        .collect();

    Ok(Json(CategoryProgressResponse {
        category_id,
        counts,
        records,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub category_id: String,
    pub flashcard_id: String,
}

/// POST /api/progress/complete - record a flashcard completion
pub async fn complete_flashcard(
    State(state): State<AppState>,
    auth: AuthContext,
    Json(request): Json<CompleteRequest>,
) -> Result<Json<ProgressRecord>, ApiError> {
    // Reject ids the catalog does not know, so stray clients cannot
    // inflate completion counts
    if state
        .catalog
        .flashcard(&request.category_id, &request.flashcard_id)
        .is_none()
    {
        return Err(ApiError::BadRequest(format!(
            "Unknown flashcard '{}/{}'",
            request.category_id, request.flashcard_id
        )));
    }

    let store = select_store(&auth, &state.db, &state.local_progress_path);
    let record = store.mark_completed(&request.category_id, &request.flashcard_id, Utc::now())?;
    Ok(Json(record))
}

/// GET /api/streaks - the signed-in user's daily streak
pub async fn get_streaks(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<Json<StreakRecord>, ApiError> {
    let user_id = auth.user_id.ok_or(ApiError::Unauthorized)?;

    let conn = try_lock(&state.db).map_err(|_| ApiError::Storage)?;
    let streak = db::get_streak(&conn, &user_id)
        .map_err(|e| {
            tracing::error!("Streak lookup failed: {}", e);
            ApiError::Storage
        })?
        .unwrap_or(StreakRecord {
            user_id,
            current_streak: 0,
            longest_streak: 0,
            last_activity_date: None,
        });

    Ok(Json(streak))
}
