//! Tests for agenda enrichment and its deterministic fallback.

use chrono::NaiveDate;
use slot_engine::agenda::{suggest_agenda, template_agenda, AgendaSource};
use slot_engine::{Meeting, MeetingType, ScheduleError};

struct CannedSource(&'static str);

impl AgendaSource for CannedSource {
    fn draft(&self, _prompt: &str) -> slot_engine::Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingSource;

impl AgendaSource for FailingSource {
    fn draft(&self, _prompt: &str) -> slot_engine::Result<String> {
        Err(ScheduleError::Enrichment("model unavailable".to_string()))
    }
}

fn standup() -> Meeting {
    Meeting::new(
        "m1",
        "Daily standup",
        NaiveDate::from_ymd_opt(2026, 3, 16)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        15,
        "alice",
        vec!["alice".to_string(), "bob".to_string()],
        MeetingType::Standup,
    )
    .unwrap()
}

#[test]
fn source_output_is_split_into_items() {
    let source = CannedSource("- Review burndown\n- Demo prep\n\n* Blockers\n");
    let items = suggest_agenda(&standup(), Some(&source));
    assert_eq!(items, vec!["Review burndown", "Demo prep", "Blockers"]);
}

#[test]
fn source_failure_falls_back_to_the_template() {
    let items = suggest_agenda(&standup(), Some(&FailingSource));
    assert_eq!(items, template_agenda(MeetingType::Standup));
}

#[test]
fn empty_source_output_falls_back_to_the_template() {
    let source = CannedSource("   \n\n");
    let items = suggest_agenda(&standup(), Some(&source));
    assert_eq!(items, template_agenda(MeetingType::Standup));
}

#[test]
fn no_source_uses_the_template_directly() {
    let items = suggest_agenda(&standup(), None);
    assert_eq!(items, template_agenda(MeetingType::Standup));
    assert!(!items.is_empty());
}

#[test]
fn every_meeting_type_has_a_template() {
    for meeting_type in [
        MeetingType::OneOnOne,
        MeetingType::TeamMeeting,
        MeetingType::AllHands,
        MeetingType::ClientCall,
        MeetingType::Interview,
        MeetingType::Standup,
        MeetingType::Brainstorm,
        MeetingType::Review,
    ] {
        assert!(
            !template_agenda(meeting_type).is_empty(),
            "missing template for {:?}",
            meeting_type
        );
    }
}
