//! Agenda suggestion with a deterministic fallback.
//!
//! An [`AgendaSource`] models the external language-model collaborator: a
//! prompt string in, free text out. Enrichment is best-effort — any failure
//! (or the absence of a source) falls back to a fixed per-type template, so
//! this path never surfaces as a failure of a scheduling operation.

use crate::error::Result;
use crate::model::{Meeting, MeetingType};

/// External free-text generator for agenda drafts.
pub trait AgendaSource {
    /// Invoke the collaborator with a prompt and return its raw text.
    fn draft(&self, prompt: &str) -> Result<String>;
}

/// Suggest agenda items for a meeting.
///
/// Tries `source` first when given; its output is split into non-empty lines
/// (leading list markers stripped). On error, or when the source produces
/// nothing usable, returns the deterministic template for the meeting's type.
pub fn suggest_agenda(meeting: &Meeting, source: Option<&dyn AgendaSource>) -> Vec<String> {
    if let Some(source) = source {
        let prompt = format!(
            "Draft a concise agenda for the {} meeting \"{}\" ({} minutes, {} participants). One item per line.",
            type_label(meeting.meeting_type),
            meeting.title,
            meeting.duration_minutes,
            meeting.participants.len(),
        );
        match source.draft(&prompt) {
            Ok(text) => {
                let items: Vec<String> = text
                    .lines()
                    .map(|line| line.trim().trim_start_matches(['-', '*']).trim())
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                if !items.is_empty() {
                    return items;
                }
            }
            Err(err) => {
                tracing::debug!(%err, meeting_id = %meeting.id, "agenda source failed, using template");
            }
        }
    }
    template_agenda(meeting.meeting_type)
}

fn type_label(meeting_type: MeetingType) -> &'static str {
    match meeting_type {
        MeetingType::OneOnOne => "1:1",
        MeetingType::TeamMeeting => "team",
        MeetingType::AllHands => "all-hands",
        MeetingType::ClientCall => "client",
        MeetingType::Interview => "interview",
        MeetingType::Standup => "standup",
        MeetingType::Brainstorm => "brainstorm",
        MeetingType::Review => "review",
    }
}

/// The deterministic agenda template for a meeting type.
pub fn template_agenda(meeting_type: MeetingType) -> Vec<String> {
    let items: &[&str] = match meeting_type {
        MeetingType::OneOnOne => &[
            "Check-in and wins since last time",
            "Current priorities and blockers",
            "Feedback both ways",
            "Action items",
        ],
        MeetingType::TeamMeeting => &[
            "Review last week's action items",
            "Project status updates",
            "Risks and blockers",
            "Decisions needed",
            "Action items and owners",
        ],
        MeetingType::AllHands => &[
            "Company updates",
            "Team highlights",
            "Q&A",
        ],
        MeetingType::ClientCall => &[
            "Recap of previous discussion",
            "Progress update",
            "Open questions from the client",
            "Next steps and timeline",
        ],
        MeetingType::Interview => &[
            "Introductions",
            "Background and experience",
            "Role-specific questions",
            "Candidate questions",
        ],
        MeetingType::Standup => &[
            "Yesterday's progress",
            "Today's plan",
            "Blockers",
        ],
        MeetingType::Brainstorm => &[
            "Problem framing",
            "Idea generation",
            "Clustering and voting",
            "Next steps",
        ],
        MeetingType::Review => &[
            "Scope of the review",
            "Walkthrough",
            "Findings and discussion",
            "Follow-up actions",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}
