//! Flashcard completion queries

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result, Row};

use crate::domain::ProgressRecord;

fn row_to_record(row: &Row<'_>) -> Result<ProgressRecord> {
    let completed_at: Option<String> = row.get(4)?;
    Ok(ProgressRecord {
        user_id: Some(row.get(0)?),
        category_id: row.get(1)?,
        flashcard_id: row.get(2)?,
        completed: row.get::<_, i64>(3)? != 0,
        completed_at: completed_at.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        }),
    })
}

pub fn get_user_progress(conn: &Connection, user_id: &str) -> Result<Vec<ProgressRecord>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT user_id, category_id, flashcard_id, completed, completed_at
    FROM progress
    WHERE user_id = ?1
    ORDER BY category_id, flashcard_id
    "#,
    )?;

    let records = stmt
        .query_map(params![user_id], row_to_record)?
        .collect::<Result<Vec<_>>>()?;

    Ok(records)
}

pub fn get_progress_by_category(
    conn: &Connection,
    user_id: &str,
    category_id: &str,
) -> Result<Vec<ProgressRecord>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT user_id, category_id, flashcard_id, completed, completed_at
    FROM progress
    WHERE user_id = ?1 AND category_id = ?2
    ORDER BY flashcard_id
    "#,
    )?;

    let records = stmt
        .query_map(params![user_id, category_id], row_to_record)?
        .collect::<Result<Vec<_>>>()?;

    Ok(records)
}

pub fn is_completed(
    conn: &Connection,
    user_id: &str,
    category_id: &str,
    flashcard_id: &str,
) -> Result<bool> {
    let count: i64 = conn.query_row(
        r#"
    SELECT COUNT(*) FROM progress
    WHERE user_id = ?1 AND category_id = ?2 AND flashcard_id = ?3 AND completed = 1
    "#,
        params![user_id, category_id, flashcard_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn count_completed_in_category(
    conn: &Connection,
    user_id: &str,
    category_id: &str,
) -> Result<i64> {
    conn.query_row(
        r#"
    SELECT COUNT(*) FROM progress
    WHERE user_id = ?1 AND category_id = ?2 AND completed = 1
    "#,
        params![user_id, category_id],
        |row| row.get(0),
    )
}

fn get_record(
    conn: &Connection,
    user_id: &str,
    category_id: &str,
    flashcard_id: &str,
) -> Result<Option<ProgressRecord>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT user_id, category_id, flashcard_id, completed, completed_at
    FROM progress
    WHERE user_id = ?1 AND category_id = ?2 AND flashcard_id = ?3
    "#,
    )?;
    let mut rows = stmt.query_map(params![user_id, category_id, flashcard_id], row_to_record)?;
    rows.next().transpose()
}

/// Mark a flashcard completed. Already-completed cards are returned
/// unchanged so the completion timestamp records the first completion.
pub fn mark_flashcard_completed(
    conn: &Connection,
    user_id: &str,
    category_id: &str,
    flashcard_id: &str,
    now: DateTime<Utc>,
) -> Result<ProgressRecord> {
    if let Some(existing) = get_record(conn, user_id, category_id, flashcard_id)? {
        if existing.completed {
            return Ok(existing);
        }
        conn.execute(
            r#"
      UPDATE progress
      SET completed = 1, completed_at = ?1
      WHERE user_id = ?2 AND category_id = ?3 AND flashcard_id = ?4
      "#,
            params![now.to_rfc3339(), user_id, category_id, flashcard_id],
        )?;
    } else {
        conn.execute(
            r#"
      INSERT INTO progress (user_id, category_id, flashcard_id, completed, completed_at)
      VALUES (?1, ?2, ?3, 1, ?4)
      "#,
            params![user_id, category_id, flashcard_id, now.to_rfc3339()],
        )?;
    }

    Ok(ProgressRecord {
        user_id: Some(user_id.to_string()),
        category_id: category_id.to_string(),
        flashcard_id: flashcard_id.to_string(),
        completed: true,
        completed_at: Some(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    fn now() -> DateTime<Utc> {
        "2026-03-10T15:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_mark_and_query_completion() {
        let env = TestEnv::new().unwrap();
        let record =
            mark_flashcard_completed(&env.conn, "alice", "conjugaison", "present", now()).unwrap();
        assert!(record.completed);
        assert_eq!(record.completed_at, Some(now()));

        assert!(is_completed(&env.conn, "alice", "conjugaison", "present").unwrap());
        assert!(!is_completed(&env.conn, "bob", "conjugaison", "present").unwrap());

        let all = get_user_progress(&env.conn, "alice").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].flashcard_id, "present");
    }

    #[test]
    fn test_repeat_completion_keeps_first_timestamp() {
        let env = TestEnv::new().unwrap();
        mark_flashcard_completed(&env.conn, "alice", "conjugaison", "present", now()).unwrap();

        let later = now() + chrono::Duration::days(2);
        let record =
            mark_flashcard_completed(&env.conn, "alice", "conjugaison", "present", later).unwrap();
        assert_eq!(record.completed_at, Some(now()));

        let all = get_user_progress(&env.conn, "alice").unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_category_counts() {
        let env = TestEnv::new().unwrap();
        mark_flashcard_completed(&env.conn, "alice", "conjugaison", "present", now()).unwrap();
        mark_flashcard_completed(&env.conn, "alice", "conjugaison", "futur", now()).unwrap();
        mark_flashcard_completed(&env.conn, "alice", "homophones", "ces-ses", now()).unwrap();

        assert_eq!(
            count_completed_in_category(&env.conn, "alice", "conjugaison").unwrap(),
            2
        );
        assert_eq!(
            count_completed_in_category(&env.conn, "alice", "homophones").unwrap(),
            1
        );
        let by_category = get_progress_by_category(&env.conn, "alice", "conjugaison").unwrap();
        assert_eq!(by_category.len(), 2);
    }
}
