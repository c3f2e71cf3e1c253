//! The meeting repository collaborator contract.
//!
//! Persistent storage lives outside this crate. The engine consumes two read
//! operations: all meetings where a user is organizer or participant whose
//! start time falls in an inclusive range, and a single meeting by id. No
//! ordering is assumed.

use chrono::NaiveDateTime;

use crate::error::{Result, ScheduleError};
use crate::model::Meeting;

/// Read-only view over stored meetings, keyed by user and date range.
pub trait MeetingRepository {
    /// All meetings involving `user_id` (as organizer or participant) whose
    /// start time lies in `[start, end]`.
    ///
    /// Returns [`ScheduleError::UserNotFound`] when the repository tracks
    /// users and the id is unknown.
    fn meetings_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Meeting>>;

    /// The stored meeting with the given id.
    ///
    /// Returns [`ScheduleError::MeetingNotFound`] when no meeting has it.
    fn meeting_by_id(&self, meeting_id: &str) -> Result<Meeting>;
}

/// In-memory repository over a fixed meeting list, for tests and the CLI.
///
/// With [`InMemoryMeetingRepository::with_users`], lookups for ids outside
/// the user registry fail with the typed not-found error; the plain
/// constructor accepts any id and simply filters by involvement.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMeetingRepository {
    meetings: Vec<Meeting>,
    known_users: Option<Vec<String>>,
}

impl InMemoryMeetingRepository {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings,
            known_users: None,
        }
    }

    pub fn with_users(meetings: Vec<Meeting>, users: Vec<String>) -> Self {
        Self {
            meetings,
            known_users: Some(users),
        }
    }
}

impl MeetingRepository for InMemoryMeetingRepository {
    fn meetings_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Meeting>> {
        if let Some(users) = &self.known_users {
            if !users.iter().any(|u| u == user_id) {
                return Err(ScheduleError::UserNotFound(user_id.to_string()));
            }
        }
        let mut found: Vec<Meeting> = self
            .meetings
            .iter()
            .filter(|m| m.involves(user_id) && m.start_time >= start && m.start_time <= end)
            .cloned()
            .collect();
        found.sort_by_key(|m| m.start_time);
        Ok(found)
    }

    fn meeting_by_id(&self, meeting_id: &str) -> Result<Meeting> {
        self.meetings
            .iter()
            .find(|m| m.id == meeting_id)
            .cloned()
            .ok_or_else(|| ScheduleError::MeetingNotFound(meeting_id.to_string()))
    }
}
