//! Core data model: time ranges, meetings, users, and scheduling preferences.
//!
//! All timestamps are naive (`chrono::NaiveDateTime`) and assumed already
//! normalized to a single reference zone by the caller. Timezone conversion
//! is explicitly out of scope; the `timezone` tag on [`User`] is carried as
//! a validated `chrono_tz::Tz` but never used for arithmetic.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Upper bound on a meeting's duration, in minutes.
pub const MAX_DURATION_MINUTES: i64 = 480;

/// Lower bound enforced when *creating* a meeting, in minutes.
pub const MIN_CREATED_DURATION_MINUTES: i64 = 15;

/// A contiguous wall-clock time range with minute-granularity arithmetic.
///
/// Invariant: `end > start`. The engine creates ranges fresh per search and
/// never persists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Build a range from a start instant and a duration in minutes.
    pub fn from_start_and_minutes(start: NaiveDateTime, minutes: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(minutes),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent ranges (one ends exactly when the other starts) do NOT overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Exact instant adjacency: one range's end equals the other's start.
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Gap in minutes between two disjoint ranges, measured on whichever side
    /// they face. `None` when the ranges overlap or touch.
    pub fn gap_minutes(&self, other: &TimeRange) -> Option<i64> {
        if self.end < other.start {
            Some((other.start - self.end).num_minutes())
        } else if other.end < self.start {
            Some((self.start - other.end).num_minutes())
        } else {
            None
        }
    }

    /// Clock hour of the range's start (0-23).
    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    /// Clock hour of the range's end (0-23).
    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }

    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }
}

/// Categorical meeting type. Closed enumeration — classification sites match
/// exhaustively so new kinds cannot slip in silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    #[serde(rename = "1:1")]
    OneOnOne,
    TeamMeeting,
    AllHands,
    ClientCall,
    Interview,
    Standup,
    Brainstorm,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Scheduled,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

/// A scheduled meeting. Owned by the repository collaborator; the engine
/// only reads meetings and returns decisions, leaving persistence to the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: i64,
    pub organizer_id: String,
    pub participants: Vec<String>,
    pub meeting_type: MeetingType,
    pub status: MeetingStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_url: Option<String>,
}

impl Meeting {
    /// Create a meeting with the end time derived from the duration.
    ///
    /// Enforces the created-meeting invariants: duration 15-480 minutes,
    /// non-empty participant set, organizer always a member of it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: NaiveDateTime,
        duration_minutes: i64,
        organizer_id: impl Into<String>,
        participants: Vec<String>,
        meeting_type: MeetingType,
    ) -> Result<Self> {
        if !(MIN_CREATED_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(ScheduleError::InvalidMeeting(format!(
                "duration must be {}-{} minutes, got {}",
                MIN_CREATED_DURATION_MINUTES, MAX_DURATION_MINUTES, duration_minutes
            )));
        }
        if participants.is_empty() {
            return Err(ScheduleError::InvalidMeeting(
                "participant list must not be empty".to_string(),
            ));
        }
        let organizer_id = organizer_id.into();
        let mut participants = participants;
        if !participants.contains(&organizer_id) {
            participants.push(organizer_id.clone());
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start_time,
            end_time: start_time + Duration::minutes(duration_minutes),
            duration_minutes,
            organizer_id,
            participants,
            meeting_type,
            status: MeetingStatus::Scheduled,
            location: None,
            meeting_url: None,
        })
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }

    /// True when `user_id` is the organizer or a participant.
    pub fn involves(&self, user_id: &str) -> bool {
        self.organizer_id == user_id || self.participants.iter().any(|p| p == user_id)
    }
}

/// A user of the scheduling system. Read-only from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub timezone: chrono_tz::Tz,
    #[serde(default)]
    pub preferences: SchedulingPreferences,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Per-search scheduling preferences.
///
/// `preferred_start_time` / `preferred_end_time` are HH:MM-of-day strings;
/// unparseable values fall back to the 09:00-17:00 defaults rather than
/// failing the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPreferences {
    pub preferred_start_time: String,
    pub preferred_end_time: String,
    pub min_break_minutes: u32,
    pub max_daily_meetings: u32,
    pub avoid_back_to_back: bool,
    pub buffer_minutes: u32,
}

impl Default for SchedulingPreferences {
    fn default() -> Self {
        Self {
            preferred_start_time: "09:00".to_string(),
            preferred_end_time: "17:00".to_string(),
            min_break_minutes: 15,
            max_daily_meetings: 8,
            avoid_back_to_back: true,
            buffer_minutes: 5,
        }
    }
}

impl SchedulingPreferences {
    /// Parsed preferred start of day, falling back to 09:00.
    pub fn preferred_start(&self) -> NaiveTime {
        parse_hhmm(&self.preferred_start_time)
            .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default())
    }

    /// Parsed preferred end of day, falling back to 17:00.
    pub fn preferred_end(&self) -> NaiveTime {
        parse_hhmm(&self.preferred_end_time)
            .unwrap_or_else(|| NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default())
    }
}

fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}
