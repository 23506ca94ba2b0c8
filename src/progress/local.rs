//! File-backed progress for anonymous visitors.
//!
//! One JSON file on disk holds the whole record list. Reads treat a
//! missing or corrupt file as empty so a damaged file never blocks the
//! learner; the next successful write replaces it. Write failures are
//! logged and swallowed, progress on this device is best-effort.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::LogOnError;
use crate::domain::ProgressRecord;

use super::{CategoryCounts, ProgressError, ProgressStore};

/// On-disk shape, a single wrapper object around the record list.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LocalFile {
    progress: Vec<ProgressRecord>,
}

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_file(&self) -> Vec<ProgressRecord> {
        let Some(contents) = std::fs::read_to_string(&self.path)
            .ok()
            .filter(|s| !s.trim().is_empty())
        else {
            return Vec::new();
        };
        serde_json::from_str::<LocalFile>(&contents)
            .log_warn_default("Ignoring unreadable local progress file")
            .progress
    }

    fn write_file(&self, records: Vec<ProgressRecord>) {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let file = LocalFile { progress: records };
        match serde_json::to_string(&file) {
            Ok(json) => {
                std::fs::write(&self.path, json).log_warn("Could not save local progress");
            }
            Err(e) => {
                tracing::warn!("Could not serialize local progress: {}", e);
            }
        }
    }
}

impl ProgressStore for LocalStore {
    fn get_all(&self) -> Result<Vec<ProgressRecord>, ProgressError> {
        Ok(self.read_file())
    }

    fn is_completed(&self, category_id: &str, flashcard_id: &str) -> Result<bool, ProgressError> {
        Ok(self
            .read_file()
            .iter()
            .any(|r| r.matches(category_id, flashcard_id) && r.completed))
    }

    fn category_counts(
        &self,
        category_id: &str,
        total_cards: i64,
    ) -> Result<CategoryCounts, ProgressError> {
        let completed = self
            .read_file()
            .iter()
            .filter(|r| r.category_id == category_id && r.completed)
            .count() as i64;
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
        let mut records = self.read_file();

        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.matches(category_id, flashcard_id))
        {
            if existing.completed {
                return Ok(existing.clone());
            }
            existing.completed = true;
            existing.completed_at = Some(now);
            let record = existing.clone();
            self.write_file(records);
            return Ok(record);
        }

        let record = ProgressRecord {
            user_id: None,
            category_id: category_id.to_string(),
            flashcard_id: flashcard_id.to_string(),
            completed: true,
            completed_at: Some(now),
        };
        records.push(record.clone());
        self.write_file(records);
        Ok(record)
    }
}
