//! The scheduling engine: conflict detection, optimal slot search, density
//! analysis, and alternative-time suggestion over an injected repository.
//!
//! The engine is stateless between calls — it reads the repository snapshot,
//! computes, and returns decisions. The repository read is its only external
//! dependency; retries and timeouts belong at the call site.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::agenda::{self, AgendaSource};
use crate::conflict::{find_conflicts, ConflictRecord, DEFAULT_BUFFER_MINUTES};
use crate::density::{meeting_density, DensityReport};
use crate::error::Result;
use crate::model::{SchedulingPreferences, TimeRange};
use crate::repo::MeetingRepository;
use crate::score::score_slot;
use crate::slots::{generate_slots, TimeSlot};

/// Hours the conflict detector widens its repository query on each side, so
/// back-to-back and buffer conditions adjacent to the range are visible.
const EXTENDED_WINDOW_HOURS: i64 = 2;

/// Maximum number of ranked slots returned by `find_optimal_slots`.
const MAX_OPTIMAL_SLOTS: usize = 10;

/// Maximum number of alternatives returned by `suggest_alternatives`.
const MAX_ALTERNATIVES: usize = 5;

/// Days searched forward from the original time when suggesting alternatives.
const ALTERNATIVE_SEARCH_DAYS: i64 = 7;

/// The scheduling engine, generic over its repository collaborator.
///
/// Explicitly constructed and dependency-injected — there is no process-wide
/// instance. Callers validate inputs (non-empty participants, duration in
/// 1-480 minutes, well-ordered windows) before invoking it; on degenerate
/// inputs the engine returns empty or zero-scored output rather than failing.
pub struct SchedulingEngine<R: MeetingRepository> {
    repo: R,
    buffer_minutes: i64,
}

impl<R: MeetingRepository> SchedulingEngine<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
        }
    }

    /// Override the buffer threshold used for `buffer_violation` records.
    pub fn with_buffer_minutes(mut self, buffer_minutes: i64) -> Self {
        self.buffer_minutes = buffer_minutes;
        self
    }

    /// Classify every existing meeting of `user_id` against `[start, end]`.
    ///
    /// The repository is queried in an extended window (±2 hours) so that
    /// adjacency and buffer conditions just outside the range are seen. An
    /// empty result means the user is free. Pure over the snapshot returned
    /// by the repository at call time.
    pub fn detect_conflicts(
        &self,
        user_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<ConflictRecord>> {
        let extended_start = start - Duration::hours(EXTENDED_WINDOW_HOURS);
        let extended_end = end + Duration::hours(EXTENDED_WINDOW_HOURS);
        let meetings = self
            .repo
            .meetings_for_user_in_range(user_id, extended_start, extended_end)?;

        let proposed = TimeRange::new(start, end);
        let conflicts = find_conflicts(&meetings, &proposed, self.buffer_minutes);
        debug!(
            user_id,
            existing = meetings.len(),
            conflicts = conflicts.len(),
            "classified conflicts"
        );
        Ok(conflicts)
    }

    /// Find the best meeting slots for the participants in the window.
    ///
    /// Generates candidates, scores each one (one conflict query per
    /// participant per candidate), discards anything scoring 0 or below,
    /// then stable-sorts descending by score. Ties keep generation order,
    /// so the earliest slot wins. At most 10 entries; an empty list (not an
    /// error) when nothing scores above 0.
    pub fn find_optimal_slots(
        &self,
        participants: &[String],
        duration_minutes: i64,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
        preferences: Option<&SchedulingPreferences>,
    ) -> Result<Vec<TimeSlot>> {
        let default_prefs = SchedulingPreferences::default();
        let prefs = preferences.unwrap_or(&default_prefs);

        let candidates = generate_slots(window_start, window_end, duration_minutes, prefs);

        let mut viable: Vec<TimeSlot> = Vec::new();
        for candidate in &candidates {
            let mut conflict_counts = Vec::with_capacity(participants.len());
            for participant in participants {
                let conflicts =
                    self.detect_conflicts(participant, candidate.start_time, candidate.end_time)?;
                conflict_counts.push((participant.clone(), conflicts.len()));
            }

            let scored = score_slot(&candidate.range(), &conflict_counts);
            if scored.score > 0.0 {
                viable.push(TimeSlot {
                    start_time: candidate.start_time,
                    end_time: candidate.end_time,
                    score: scored.score,
                    available: scored.available,
                    conflicted: scored.conflicted,
                    reasoning: scored.reasoning,
                });
            }
        }

        debug!(
            candidates = candidates.len(),
            viable = viable.len(),
            "scored candidate slots"
        );

        // Stable sort: equal scores retain generation order (earliest first).
        viable.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        viable.truncate(MAX_OPTIMAL_SLOTS);
        Ok(viable)
    }

    /// Per-day meeting load for `user_id` on `date`.
    pub fn meeting_density(&self, user_id: &str, date: NaiveDate) -> Result<DensityReport> {
        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1) - Duration::seconds(1);
        let meetings = self
            .repo
            .meetings_for_user_in_range(user_id, day_start, day_end)?;
        Ok(meeting_density(&meetings))
    }

    /// Suggest alternative times when a proposed slot conflicts.
    ///
    /// Searches the 7 days following `original_start` and drops any suggestion
    /// whose range intersects the original proposed range, even when that slot
    /// would otherwise rank highest. Returns at most 5 entries.
    pub fn suggest_alternatives(
        &self,
        original_start: NaiveDateTime,
        duration_minutes: i64,
        participants: &[String],
    ) -> Result<Vec<TimeSlot>> {
        let search_end = original_start + Duration::days(ALTERNATIVE_SEARCH_DAYS);
        let original = TimeRange::from_start_and_minutes(original_start, duration_minutes);

        let mut alternatives = self.find_optimal_slots(
            participants,
            duration_minutes,
            original_start,
            search_end,
            None,
        )?;
        alternatives.retain(|slot| !slot.range().overlaps(&original));
        alternatives.truncate(MAX_ALTERNATIVES);
        Ok(alternatives)
    }

    /// Agenda items for a stored meeting, looked up by id.
    ///
    /// Fails only when the meeting id is unknown; enrichment through
    /// `source` is best-effort and falls back to the per-type template.
    pub fn suggest_agenda(
        &self,
        meeting_id: &str,
        source: Option<&dyn AgendaSource>,
    ) -> Result<Vec<String>> {
        let meeting = self.repo.meeting_by_id(meeting_id)?;
        Ok(agenda::suggest_agenda(&meeting, source))
    }
}
