//! Daily streak persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::StreakRecord;
use crate::progress::streak;

pub fn get_streak(conn: &Connection, user_id: &str) -> Result<Option<StreakRecord>> {
    conn.query_row(
        r#"
    SELECT user_id, current_streak, longest_streak, last_activity_date
    FROM streaks
    WHERE user_id = ?1
    "#,
        params![user_id],
        |row| {
            let last: Option<String> = row.get(3)?;
            Ok(StreakRecord {
                user_id: row.get(0)?,
                current_streak: row.get(1)?,
                longest_streak: row.get(2)?,
                last_activity_date: last.and_then(|s| {
                    DateTime::parse_from_rfc3339(&s)
                        .ok()
                        .map(|dt| dt.with_timezone(&Utc))
                }),
            })
        },
    )
    .optional()
}

/// Advance the user's streak for activity at `now` and persist the result.
pub fn record_activity(conn: &Connection, user_id: &str, now: DateTime<Utc>) -> Result<StreakRecord> {
    let existing = get_streak(conn, user_id)?;
    let updated = streak::advance(existing.as_ref(), user_id, now);

    conn.execute(
        r#"
    INSERT INTO streaks (user_id, current_streak, longest_streak, last_activity_date)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(user_id) DO UPDATE SET
      current_streak = excluded.current_streak,
      longest_streak = excluded.longest_streak,
      last_activity_date = excluded.last_activity_date
    "#,
        params![
            updated.user_id,
            updated.current_streak,
            updated.longest_streak,
            updated.last_activity_date.map(|dt| dt.to_rfc3339()),
        ],
    )?;

    Ok(updated)
}
