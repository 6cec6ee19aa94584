//! # Daily Reminder
//!
//! The repo owns the schedule arithmetic only; actually delivering a
//! notification at the computed instant is the host platform's job.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDateTime, NaiveTime};

/// A wall-clock reminder time, persisted as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
    pub hour: u32,
    pub minute: u32,
}

impl Default for ReminderTime {
    fn default() -> Self {
        // 08:00, matching the app's first-run default
        Self { hour: 8, minute: 0 }
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError(String);

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid reminder time: {}", self.0)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for ReminderTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError(s.to_string()))?;
        let hour: u32 = h.parse().map_err(|_| ParseTimeError(s.to_string()))?;
        let minute: u32 = m.parse().map_err(|_| ParseTimeError(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(ParseTimeError(s.to_string()));
        }
        Ok(Self { hour, minute })
    }
}

impl ReminderTime {
    /// Adjusts by whole minutes, wrapping around midnight in both directions.
    pub fn shifted_by(self, minutes: i32) -> Self {
        const DAY: i32 = 24 * 60;
        let total = (self.hour as i32 * 60 + self.minute as i32 + minutes).rem_euclid(DAY);
        Self {
            hour: (total / 60) as u32,
            minute: (total % 60) as u32,
        }
    }
}

/// The next instant the reminder should fire: today at the configured time
/// if that is still ahead of `now`, otherwise tomorrow at that time.
pub fn next_occurrence(now: NaiveDateTime, time: ReminderTime) -> NaiveDateTime {
    // Valid by ReminderTime's range invariant
    let at = NaiveTime::from_hms_opt(time.hour, time.minute, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(8, 0, 0).expect("static time"));
    let today = now.date().and_time(at);
    if today > now {
        today
    } else {
        now.date()
            .checked_add_days(Days::new(1))
            .map(|d| d.and_time(at))
            .unwrap_or(today)
    }
}
