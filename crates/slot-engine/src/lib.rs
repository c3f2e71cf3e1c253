//! # slot-engine
//!
//! Deterministic meeting slot search, conflict detection, and slot scoring
//! for calendar assistants.
//!
//! The engine finds feasible and preferred meeting times for a group of
//! people, classifies collisions between a proposed range and a person's
//! existing commitments, and ranks candidate slots by a fixed multi-factor
//! desirability score. All timestamps are naive and assumed normalized to a
//! single reference zone by the caller; persistence lives behind the
//! [`repo::MeetingRepository`] collaborator.
//!
//! ## Modules
//!
//! - [`model`] — time ranges, meetings, users, preferences
//! - [`conflict`] — overlap / back-to-back / buffer-violation classification
//! - [`slots`] — candidate slot generation over a date window
//! - [`score`] — the fixed slot scoring rule table
//! - [`engine`] — the dependency-injected engine orchestrating the above
//! - [`density`] — per-day meeting load metrics
//! - [`agenda`] — best-effort agenda enrichment with template fallback
//! - [`repo`] — the repository collaborator contract
//! - [`error`] — error types

pub mod agenda;
pub mod conflict;
pub mod density;
pub mod engine;
pub mod error;
pub mod model;
pub mod repo;
pub mod score;
pub mod slots;

pub use agenda::{suggest_agenda, template_agenda, AgendaSource};
pub use conflict::{find_conflicts, ConflictKind, ConflictRecord, DEFAULT_BUFFER_MINUTES};
pub use density::{meeting_density, DensityLevel, DensityReport};
pub use engine::SchedulingEngine;
pub use error::{Result, ScheduleError};
pub use model::{Meeting, MeetingStatus, MeetingType, SchedulingPreferences, TimeRange, User};
pub use repo::{InMemoryMeetingRepository, MeetingRepository};
pub use score::{score_slot, SlotScore};
pub use slots::{generate_slots, TimeSlot};
