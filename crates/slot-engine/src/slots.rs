//! Candidate slot generation across a date window.
//!
//! Walks the window day by day, skips weekends, and emits a candidate every
//! 30 minutes within the preferred working hours as long as the full meeting
//! duration still fits before the preferred end of day.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::{SchedulingPreferences, TimeRange};

/// Stride between candidate slot starts within a working day, in minutes.
const SLOT_STRIDE_MINUTES: i64 = 30;

/// A candidate meeting time slot with its desirability score.
///
/// Created fresh per search and discarded after ranking; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Desirability score, 0-100 baseline plus bonuses. Never negative.
    pub score: f64,
    /// Participants with no conflict in this slot.
    pub available: Vec<String>,
    /// Participants with at least one conflict in this slot.
    pub conflicted: Vec<String>,
    /// Ordered, semicolon-separated descriptions of every scoring rule that
    /// fired. "Standard slot" when none did.
    pub reasoning: String,
}

impl TimeSlot {
    /// A freshly generated, not-yet-scored candidate.
    pub fn unscored(range: TimeRange) -> Self {
        Self {
            start_time: range.start,
            end_time: range.end,
            score: 0.0,
            available: Vec::new(),
            conflicted: Vec::new(),
            reasoning: String::new(),
        }
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// Enumerate candidate slots across `[window_start, window_end)`.
///
/// Saturdays and Sundays are skipped entirely. Within each working day the
/// admissible interval is `[preferred_start, preferred_end]` from the
/// preferences; candidates start every 30 minutes from the preferred start
/// while `slot_start + duration <= day_end`. On the first day candidates
/// begin at the preferred start even when the window opens later in the day.
///
/// The returned list is ordered by ascending start time. That order is a
/// contract: the selector's score sort is stable, so ties resolve to the
/// earliest-generated slot.
pub fn generate_slots(
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    duration_minutes: i64,
    prefs: &SchedulingPreferences,
) -> Vec<TimeSlot> {
    let pref_start = prefs.preferred_start();
    let pref_end = prefs.preferred_end();
    let duration = Duration::minutes(duration_minutes);

    let mut slots = Vec::new();
    let mut cursor = window_start;
    while cursor < window_end {
        let date = cursor.date();
        if is_weekend(date) {
            cursor = next_day_at(date, pref_start);
            continue;
        }

        let day_end = date.and_time(pref_end);
        let mut slot_start = date.and_time(pref_start);
        while slot_start + duration <= day_end {
            let range = TimeRange::new(slot_start, slot_start + duration);
            slots.push(TimeSlot::unscored(range));
            slot_start += Duration::minutes(SLOT_STRIDE_MINUTES);
        }

        cursor = next_day_at(date, pref_start);
    }

    slots
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn next_day_at(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    (date + Duration::days(1)).and_time(time)
}
