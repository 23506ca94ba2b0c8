//! Progress persistence behind a single trait with two backends.
//!
//! Signed-in users write to the shared SQLite database so their progress
//! follows them across devices. Anonymous visitors get a file-backed store
//! on this machine only. The backend is chosen per request from the auth
//! context; nothing is ever migrated between the two.

pub mod local;
pub mod remote;
pub mod streak;

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::db::{DbLockError, DbPool};
use crate::domain::ProgressRecord;
use crate::state::AuthContext;

pub use local::LocalStore;
pub use remote::RemoteStore;

#[derive(Debug)]
pub enum ProgressError {
    /// Underlying SQLite failure
    Storage(rusqlite::Error),
    /// Database lock unavailable or poisoned
    Unavailable,
}

impl std::fmt::Display for ProgressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressError::Storage(e) => write!(f, "Progress storage error: {}", e),
            ProgressError::Unavailable => write!(f, "Progress storage unavailable"),
        }
    }
}

impl std::error::Error for ProgressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProgressError::Storage(e) => Some(e),
            ProgressError::Unavailable => None,
        }
    }
}

impl From<rusqlite::Error> for ProgressError {
    fn from(e: rusqlite::Error) -> Self {
        ProgressError::Storage(e)
    }
}

impl From<DbLockError> for ProgressError {
    fn from(_: DbLockError) -> Self {
        ProgressError::Unavailable
    }
}

/// Completion counts for one category card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub completed: i64,
    pub total: i64,
}

impl CategoryCounts {
    pub fn is_all_done(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Completion storage for one identity (a user id or this device).
pub trait ProgressStore {
    /// Every stored record, completed or not.
    fn get_all(&self) -> Result<Vec<ProgressRecord>, ProgressError>;

    fn is_completed(&self, category_id: &str, flashcard_id: &str) -> Result<bool, ProgressError>;

    /// Completed count for a category out of `total_cards` in the catalog.
    fn category_counts(
        &self,
        category_id: &str,
        total_cards: i64,
    ) -> Result<CategoryCounts, ProgressError>;

    /// Record a completion. Idempotent: an already-completed card returns
    /// its existing record without refreshing the timestamp.
    fn mark_completed(
        &self,
        category_id: &str,
        flashcard_id: &str,
        now: chrono::DateTime<Utc>,
    ) -> Result<ProgressRecord, ProgressError>;
}

/// Pick the backend for one request: the shared database when the request
/// carries a signed-in user, the local file otherwise.
pub fn select_store(
    auth: &AuthContext,
    db: &DbPool,
    local_path: &Path,
) -> Box<dyn ProgressStore> {
    match &auth.user_id {
        Some(user_id) => Box::new(RemoteStore::new(db.clone(), user_id.clone())),
        None => Box::new(LocalStore::new(local_path.to_path_buf())),
    }
}
