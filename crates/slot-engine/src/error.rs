//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    #[error("Invalid meeting: {0}")]
    InvalidMeeting(String),

    #[error("Enrichment failed: {0}")]
    Enrichment(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
