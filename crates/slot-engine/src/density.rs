//! Per-day meeting load metrics.
//!
//! Density is the fraction of an assumed 8-hour (480-minute) working day
//! already consumed by meetings, expressed 0-100.

use serde::{Deserialize, Serialize};

use crate::model::Meeting;

/// Minutes in the assumed working day.
pub const WORKING_DAY_MINUTES: i64 = 480;

/// Load bucket for a day. Exact boundary values belong to the lower bucket:
/// a density of exactly 50 is `Moderate`, exactly 75 is `Heavy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityLevel {
    Light,
    Moderate,
    Heavy,
    Overloaded,
}

impl DensityLevel {
    fn from_score(score: f64) -> Self {
        // Boundary values belong to the lower bucket: exactly 50 is still
        // Moderate, exactly 75 still Heavy.
        if score <= 25.0 {
            DensityLevel::Light
        } else if score <= 50.0 {
            DensityLevel::Moderate
        } else if score <= 75.0 {
            DensityLevel::Heavy
        } else {
            DensityLevel::Overloaded
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            DensityLevel::Light => "Light meeting day - good for scheduling",
            DensityLevel::Moderate => "Moderate meeting load - schedule with care",
            DensityLevel::Heavy => "Heavy meeting day - avoid non-essential meetings",
            DensityLevel::Overloaded => "Overloaded day - consider rescheduling",
        }
    }
}

/// Density metrics for one person on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityReport {
    pub total_meetings: usize,
    pub total_minutes: i64,
    /// Remaining minutes of the working day. Negative when the day is
    /// overbooked past 480 minutes.
    pub free_minutes: i64,
    pub density_score: f64,
    pub level: DensityLevel,
    pub recommendation: String,
}

/// Compute density metrics over one day's meetings.
pub fn meeting_density(meetings: &[Meeting]) -> DensityReport {
    let total_minutes: i64 = meetings.iter().map(|m| m.duration_minutes).sum();
    let density_score = total_minutes as f64 / WORKING_DAY_MINUTES as f64 * 100.0;
    let level = DensityLevel::from_score(density_score);

    DensityReport {
        total_meetings: meetings.len(),
        total_minutes,
        free_minutes: WORKING_DAY_MINUTES - total_minutes,
        density_score,
        level,
        recommendation: level.recommendation().to_string(),
    }
}
