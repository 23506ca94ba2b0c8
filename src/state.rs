//! Application state and authentication context types.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::content::Catalog;
use crate::db::DbPool;

pub const USER_COOKIE_NAME: &str = "session_user";

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared progress database (progress, streaks)
    pub db: DbPool,

    /// Loaded grammar content, immutable for the process lifetime
    pub catalog: Arc<Catalog>,

    /// Progress file for anonymous visitors
    pub local_progress_path: PathBuf,
}

impl AppState {
    pub fn new(db: DbPool, catalog: Catalog, local_progress_path: PathBuf) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
            local_progress_path,
        }
    }
}

/// Request identity, extracted from the user cookie.
/// Anonymous requests are valid; `user_id` is simply absent, and progress
/// then lands in the local file store instead of the database.
#[derive(Clone, Default)]
pub struct AuthContext {
    pub user_id: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let user_id = jar
            .get(USER_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());
        Ok(AuthContext { user_id })
    }
}
