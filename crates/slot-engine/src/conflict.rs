//! Conflict classification between a proposed time range and existing meetings.
//!
//! Each existing meeting is classified against the proposed range with a fixed
//! precedence — overlap, then back-to-back, then buffer violation — so a
//! meeting is never double-counted. A true back-to-back pair (zero-minute gap)
//! is reported as `BackToBack`, never as a buffer violation, even though
//! 0 < buffer. That precedence is load-bearing: downstream scoring counts
//! records, and tests pin the classification of each scenario.

use serde::{Deserialize, Serialize};

use crate::model::{Meeting, TimeRange};

/// Minimum gap required between two meetings before the detector flags a
/// buffer violation, in minutes.
pub const DEFAULT_BUFFER_MINUTES: i64 = 15;

/// How an existing meeting collides with a proposed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The time ranges intersect.
    Overlap,
    /// One range's end instant equals the other's start instant.
    BackToBack,
    /// The ranges are disjoint but the gap between them is smaller than the
    /// buffer threshold.
    BufferViolation,
}

/// A pre-existing meeting found to collide with a proposed range.
///
/// Transient — produced per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub meeting_id: String,
    pub title: String,
    pub start_time: chrono::NaiveDateTime,
    pub end_time: chrono::NaiveDateTime,
    pub participants: Vec<String>,
    pub kind: ConflictKind,
}

/// Classify the relationship between a proposed range and one existing range.
///
/// Returns `None` when the ranges neither overlap, touch, nor sit closer than
/// `buffer_minutes` apart — meaning "free".
pub fn classify(proposed: &TimeRange, existing: &TimeRange, buffer_minutes: i64) -> Option<ConflictKind> {
    if proposed.overlaps(existing) {
        Some(ConflictKind::Overlap)
    } else if proposed.touches(existing) {
        Some(ConflictKind::BackToBack)
    } else if matches!(proposed.gap_minutes(existing), Some(gap) if gap < buffer_minutes) {
        Some(ConflictKind::BufferViolation)
    } else {
        None
    }
}

/// Classify every meeting in `meetings` against the proposed range.
///
/// Pure over the given snapshot; callers fetch meetings from the repository
/// in a window wide enough for back-to-back and buffer conditions adjacent
/// to the boundary to be visible (see `SchedulingEngine::detect_conflicts`).
pub fn find_conflicts(
    meetings: &[Meeting],
    proposed: &TimeRange,
    buffer_minutes: i64,
) -> Vec<ConflictRecord> {
    meetings
        .iter()
        .filter_map(|meeting| {
            classify(proposed, &meeting.range(), buffer_minutes).map(|kind| ConflictRecord {
                meeting_id: meeting.id.clone(),
                title: meeting.title.clone(),
                start_time: meeting.start_time,
                end_time: meeting.end_time,
                participants: meeting.participants.clone(),
                kind,
            })
        })
        .collect()
}
