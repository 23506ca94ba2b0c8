//! Database-backed progress for signed-in users.
//!
//! Delegates to the queries in [`crate::db`]. Marking a card completed
//! also advances the user's daily streak inside the same transaction, so
//! a completion and its streak credit land together or not at all.

use chrono::{DateTime, Utc};

use crate::db::{self, try_lock, DbPool};
use crate::domain::ProgressRecord;

use super::{CategoryCounts, ProgressError, ProgressStore};

pub struct RemoteStore {
    db: DbPool,
    user_id: String,
}

impl RemoteStore {
    pub fn new(db: DbPool, user_id: String) -> Self {
        Self { db, user_id }
    }
}

impl ProgressStore for RemoteStore {
    fn get_all(&self) -> Result<Vec<ProgressRecord>, ProgressError> {
        let conn = try_lock(&self.db)?;
        Ok(db::get_user_progress(&conn, &self.user_id)?)
    }

    fn is_completed(&self, category_id: &str, flashcard_id: &str) -> Result<bool, ProgressError> {
        let conn = try_lock(&self.db)?;
        Ok(db::is_completed(
            &conn,
            &self.user_id,
            category_id,
            flashcard_id,
        )?)
    }

    fn category_counts(
        &self,
        category_id: &str,
        total_cards: i64,
    ) -> Result<CategoryCounts, ProgressError> {
        let conn = try_lock(&self.db)?;
        let completed = db::count_completed_in_category(&conn, &self.user_id, category_id)?;
        Ok(CategoryCounts {
            completed,
            total: total_cards,
        })
    }

    fn mark_completed(
        &self,
        category_id: &str,
        flashcard_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ProgressRecord, ProgressError> {
        let mut conn = try_lock(&self.db)?;
        let tx = conn.transaction()?;
        let record =
            db::mark_flashcard_completed(&tx, &self.user_id, category_id, flashcard_id, now)?;
        db::record_activity(&tx, &self.user_id, now)?;
        tx.commit()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::get_streak;
    use crate::testing::TestEnv;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-03-10T15:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_completion_also_credits_streak() {
        let env = TestEnv::new().unwrap();
        let store = RemoteStore::new(env.pool(), "alice".to_string());

        let record = store.mark_completed("conjugaison", "present", now()).unwrap();
        assert!(record.completed);
        assert_eq!(record.user_id.as_deref(), Some("alice"));

        let conn = env.pool();
        let conn = conn.lock().unwrap();
        let streak = get_streak(&conn, "alice").unwrap().unwrap();
        assert_eq!(streak.current_streak, 1);
    }

    #[test]
    fn test_repeat_completion_still_counts_as_activity() {
        let env = TestEnv::new().unwrap();
        let store = RemoteStore::new(env.pool(), "alice".to_string());
        store.mark_completed("conjugaison", "present", now()).unwrap();

        // Same card the next day: progress unchanged, streak extends
        let next_day = now() + Duration::days(1);
        let record = store
            .mark_completed("conjugaison", "present", next_day)
            .unwrap();
        assert_eq!(record.completed_at, Some(now()));

        let conn = env.pool();
        let conn = conn.lock().unwrap();
        let streak = get_streak(&conn, "alice").unwrap().unwrap();
        assert_eq!(streak.current_streak, 2);
    }

    #[test]
    fn test_stores_are_isolated_per_user() {
        let env = TestEnv::new().unwrap();
        let alice = RemoteStore::new(env.pool(), "alice".to_string());
        let bob = RemoteStore::new(env.pool(), "bob".to_string());

        alice.mark_completed("conjugaison", "present", now()).unwrap();
        assert!(alice.is_completed("conjugaison", "present").unwrap());
        assert!(!bob.is_completed("conjugaison", "present").unwrap());
        assert!(bob.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_category_counts_against_catalog_total() {
        let env = TestEnv::new().unwrap();
        let store = RemoteStore::new(env.pool(), "alice".to_string());
        store.mark_completed("conjugaison", "present", now()).unwrap();
        store.mark_completed("conjugaison", "futur", now()).unwrap();

        let counts = store.category_counts("conjugaison", 3).unwrap();
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.total, 3);
    }
}
