//! Streak arithmetic. Pure functions so the day-boundary rules can be
//! tested without touching storage.

use chrono::{DateTime, Utc};

use crate::domain::StreakRecord;

const MS_PER_DAY: i64 = 86_400_000;

/// Advance a streak for an activity happening at `now`.
///
/// Elapsed whole days since the last recorded activity decide the outcome:
/// zero days (or a clock that moved backwards) leaves the counts alone,
/// exactly one day extends the streak, anything longer resets it to 1.
/// The longest streak only ever grows. `last_activity_date` is always
/// refreshed to `now`, including on the same-day path.
pub fn advance(
    existing: Option<&StreakRecord>,
    user_id: &str,
    now: DateTime<Utc>,
) -> StreakRecord {
    let Some(existing) = existing else {
        return StreakRecord {
            user_id: user_id.to_string(),
            current_streak: 1,
            longest_streak: 1,
            last_activity_date: Some(now),
        };
    };

    let current = match existing.last_activity_date {
        None => 1,
        Some(last) => {
            let days = now
                .signed_duration_since(last)
                .num_milliseconds()
                .div_euclid(MS_PER_DAY);
            match days {
                d if d <= 0 => existing.current_streak.max(1),
                1 => existing.current_streak + 1,
                _ => 1,
            }
        }
    };

    StreakRecord {
        user_id: user_id.to_string(),
        current_streak: current,
        longest_streak: existing.longest_streak.max(current),
        last_activity_date: Some(now),
    }
}
