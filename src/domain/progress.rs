//! Progress and streak records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A learner's completion state for one flashcard.
///
/// Keyed by (user, category, flashcard) in remote mode; the local file
/// omits `user_id` and keys by (category, flashcard). `completed` only
/// ever flips false to true; records are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub category_id: String,
    pub flashcard_id: String,
    pub completed: bool,
    /// Completion timestamp. The legacy local file called this
    /// `lastVisited`; both names are accepted on read.
    #[serde(default, alias = "lastVisited", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    pub fn matches(&self, category_id: &str, flashcard_id: &str) -> bool {
        self.category_id == category_id && self.flashcard_id == flashcard_id
    }
}

/// Consecutive-day activity counters for one user.
///
/// Invariant: `longest_streak >= current_streak` after every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    pub user_id: String,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub last_activity_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_record_accepts_last_visited_alias() {
        let json = r#"{
            "categoryId": "conjugaison",
            "flashcardId": "conjugaison-present",
            "completed": true,
            "lastVisited": "2026-08-01T10:00:00Z"
        }"#;

        let record: ProgressRecord = serde_json::from_str(json).unwrap();
        assert!(record.user_id.is_none());
        assert!(record.completed);
        assert!(record.completed_at.is_some());
    }

    #[test]
    fn test_progress_record_serializes_without_user_in_local_mode() {
        let record = ProgressRecord {
            user_id: None,
            category_id: "conjugaison".to_string(),
            flashcard_id: "conjugaison-present".to_string(),
            completed: true,
            completed_at: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("userId"));
        assert!(json.contains("\"categoryId\":\"conjugaison\""));
    }
}
