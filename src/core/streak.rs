//! # Streak Calculation
//!
//! Counts consecutive calendar days the app has been opened, inclusive of
//! today. The calculation itself is pure: the host reads the persisted
//! scalars, calls [`update_streak`] once on startup, and writes back only
//! when `should_persist` says so.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Result of one streak calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    /// The streak after this visit. Always >= 1.
    pub streak: u32,
    /// True when the persisted scalars changed and must be written back.
    pub should_persist: bool,
    /// The visit date to persist (always `today`).
    pub last_visit: NaiveDate,
}

/// Derives the new streak from today's date and the persisted scalars.
///
/// Only calendar dates are compared; time of day never matters. The four
/// branches are mutually exclusive and evaluated in order:
/// first visit, same day, consecutive day, broken streak.
pub fn update_streak(
    today: NaiveDate,
    last_visit: Option<NaiveDate>,
    stored_streak: u32,
) -> StreakUpdate {
    let Some(last) = last_visit else {
        // First-ever visit
        return StreakUpdate {
            streak: 1,
            should_persist: true,
            last_visit: today,
        };
    };

    if last == today {
        // Already counted today; repeated calls are idempotent
        return StreakUpdate {
            streak: stored_streak,
            should_persist: false,
            last_visit: today,
        };
    }

    let yesterday = today.checked_sub_days(Days::new(1));
    if yesterday == Some(last) {
        return StreakUpdate {
            streak: stored_streak + 1,
            should_persist: true,
            last_visit: today,
        };
    }

    // Gap of two or more days, or a last visit in the future (clock skew):
    // the streak restarts at today.
    StreakUpdate {
        streak: 1,
        should_persist: true,
        last_visit: today,
    }
}

// ============================================================================
// Persistence (host side)
// ============================================================================

/// The two persisted scalars, stored as one JSON file in the data dir.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StreakRecord {
    pub last_visit: Option<NaiveDate>,
    pub current_streak: u32,
}

fn streak_path(dir: &Path) -> PathBuf {
    dir.join("streak.json")
}

/// Loads the persisted streak scalars. Missing or unreadable files fall back
/// to the default record (first-visit semantics): best effort, log and degrade.
pub fn load_record(dir: &Path) -> StreakRecord {
    let path = streak_path(dir);
    if !path.exists() {
        return StreakRecord::default();
    }
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(e) => {
                warn!("Malformed streak file {}: {}", path.display(), e);
                StreakRecord::default()
            }
        },
        Err(e) => {
            warn!("Failed to read streak file {}: {}", path.display(), e);
            StreakRecord::default()
        }
    }
}

/// Atomically writes the streak scalars (write `.tmp`, then rename).
pub fn save_record(dir: &Path, record: &StreakRecord) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let path = streak_path(dir);
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &path)?;
    debug!("Streak saved: {:?}", record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_visit_starts_at_one() {
        let today = date(2026, 8, 24);
        let update = update_streak(today, None, 99);
        assert_eq!(update.streak, 1);
        assert!(update.should_persist);
        assert_eq!(update.last_visit, today);
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let today = date(2026, 8, 24);
        let update = update_streak(today, Some(today), 5);
        assert_eq!(update.streak, 5);
        assert!(!update.should_persist);
    }

    #[test]
    fn test_consecutive_day_increments() {
        let today = date(2026, 8, 24);
        let update = update_streak(today, Some(date(2026, 8, 23)), 5);
        assert_eq!(update.streak, 6);
        assert!(update.should_persist);
        assert_eq!(update.last_visit, today);
    }

    #[test]
    fn test_increment_across_month_boundary() {
        let today = date(2026, 9, 1);
        let update = update_streak(today, Some(date(2026, 8, 31)), 12);
        assert_eq!(update.streak, 13);
        assert!(update.should_persist);
    }

    #[test]
    fn test_gap_resets_to_one() {
        let today = date(2026, 8, 24);
        let update = update_streak(today, Some(date(2026, 8, 21)), 40);
        assert_eq!(update.streak, 1);
        assert!(update.should_persist);
        assert_eq!(update.last_visit, today);
    }

    #[test]
    fn test_future_last_visit_resets_to_one() {
        // Clock rolled back: a future last visit counts as a broken streak
        let today = date(2026, 8, 24);
        let update = update_streak(today, Some(date(2026, 8, 30)), 7);
        assert_eq!(update.streak, 1);
        assert!(update.should_persist);
    }

    #[test]
    fn test_record_round_trip() {
        let dir = std::env::temp_dir().join(format!("lumina-streak-{}", uuid::Uuid::new_v4()));
        let record = StreakRecord {
            last_visit: Some(date(2026, 8, 24)),
            current_streak: 3,
        };
        save_record(&dir, &record).unwrap();
        let loaded = load_record(&dir);
        assert_eq!(loaded.last_visit, Some(date(2026, 8, 24)));
        assert_eq!(loaded.current_streak, 3);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_record_defaults() {
        let dir = std::env::temp_dir().join(format!("lumina-streak-{}", uuid::Uuid::new_v4()));
        let loaded = load_record(&dir);
        assert_eq!(loaded.last_visit, None);
        assert_eq!(loaded.current_streak, 0);
    }
}
