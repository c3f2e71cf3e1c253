//! Tests for the slot scoring rule table.
//!
//! The deltas here are contractual; every number is asserted exactly.
//! 2026-03-16 is a Monday, 2026-03-17 a Tuesday, 2026-03-20 a Friday.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{score_slot, TimeRange};

fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn range(day: u32, hour: u32, min: u32, minutes: i64) -> TimeRange {
    TimeRange::from_start_and_minutes(at(day, hour, min), minutes)
}

fn free(participants: &[&str]) -> Vec<(String, usize)> {
    participants.iter().map(|p| (p.to_string(), 0)).collect()
}

#[test]
fn monday_morning_fully_available_scores_140() {
    // 100 + 20 (all available) + 15 (9-11am) + 5 (Monday) = 140.
    let scored = score_slot(&range(16, 9, 0, 30), &free(&["alice"]));

    assert_eq!(scored.score, 140.0);
    assert_eq!(scored.available, vec!["alice"]);
    assert!(scored.conflicted.is_empty());
    assert_eq!(
        scored.reasoning,
        "All participants available; Good morning time; Monday energy"
    );
}

#[test]
fn neutral_tuesday_noon_scores_120() {
    // Only the all-available bonus fires: 100 + 20.
    let scored = score_slot(&range(17, 12, 0, 30), &free(&["alice", "bob"]));

    assert_eq!(scored.score, 120.0);
    assert_eq!(scored.reasoning, "All participants available");
}

#[test]
fn each_conflict_costs_30_points() {
    let counts = vec![("alice".to_string(), 1), ("bob".to_string(), 0)];
    let scored = score_slot(&range(17, 12, 0, 30), &counts);

    // 100 - 30; no all-available bonus.
    assert_eq!(scored.score, 70.0);
    assert_eq!(scored.available, vec!["bob"]);
    assert_eq!(scored.conflicted, vec!["alice"]);
    assert_eq!(scored.reasoning, "Conflicts for alice: 1");
}

#[test]
fn conflict_penalty_scales_with_count() {
    let counts = vec![("alice".to_string(), 2)];
    let scored = score_slot(&range(17, 12, 0, 30), &counts);
    assert_eq!(scored.score, 40.0);
    assert_eq!(scored.reasoning, "Conflicts for alice: 2");
}

#[test]
fn score_never_drops_below_zero() {
    let counts = vec![("alice".to_string(), 5)];
    let scored = score_slot(&range(17, 12, 0, 30), &counts);

    assert_eq!(scored.score, 0.0);
    assert_eq!(scored.reasoning, "Conflicts for alice: 5");
}

#[test]
fn lunch_hour_penalty() {
    // 100 + 20 - 10.
    let scored = score_slot(&range(17, 13, 0, 30), &free(&["alice"]));
    assert_eq!(scored.score, 110.0);
    assert!(scored.reasoning.contains("Lunch time penalty"));

    let scored = score_slot(&range(17, 14, 30, 30), &free(&["alice"]));
    assert_eq!(scored.score, 110.0);
}

#[test]
fn late_afternoon_penalty() {
    // 100 + 20 - 5.
    let scored = score_slot(&range(17, 16, 0, 30), &free(&["alice"]));
    assert_eq!(scored.score, 115.0);
    assert!(scored.reasoning.contains("Late afternoon"));
}

#[test]
fn off_hours_penalty() {
    // 100 + 20 - 25, on both sides of the working day.
    let early = score_slot(&range(17, 7, 0, 30), &free(&["alice"]));
    assert_eq!(early.score, 95.0);
    assert!(early.reasoning.contains("Outside normal hours"));

    let late = score_slot(&range(17, 19, 0, 30), &free(&["alice"]));
    assert_eq!(late.score, 95.0);
}

#[test]
fn boundary_hours_are_neutral() {
    // Hours 8, 12, 15 and 18 trigger no time-of-day rule.
    for hour in [8, 12, 15, 18] {
        let scored = score_slot(&range(17, hour, 0, 30), &free(&["alice"]));
        assert_eq!(scored.score, 120.0, "hour {} must be neutral", hour);
    }
}

#[test]
fn friday_penalty() {
    // 100 + 20 - 5.
    let scored = score_slot(&range(20, 12, 0, 30), &free(&["alice"]));
    assert_eq!(scored.score, 115.0);
    assert!(scored.reasoning.contains("Friday afternoon"));
}

#[test]
fn long_meeting_penalty_on_clock_hour_span() {
    // 10:30 → 12:30 spans 2 clock hours: 100 + 20 + 15 (10am) - 10 = 125.
    let scored = score_slot(&range(17, 10, 30, 120), &free(&["alice"]));
    assert_eq!(scored.score, 125.0);
    assert!(scored.reasoning.contains("Long meeting"));

    // A 30-minute slot spans no clock hours.
    let scored = score_slot(&range(17, 12, 0, 30), &free(&["alice"]));
    assert!(!scored.reasoning.contains("Long meeting"));
}

#[test]
fn reasoning_preserves_rule_evaluation_order() {
    // Conflicts, then all-available never fires, then hour, then weekday.
    let counts = vec![("alice".to_string(), 1), ("bob".to_string(), 1)];
    let scored = score_slot(&range(16, 9, 0, 30), &counts);

    assert_eq!(
        scored.reasoning,
        "Conflicts for alice: 1; Conflicts for bob: 1; Good morning time; Monday energy"
    );
    // 100 - 30 - 30 + 15 + 5.
    assert_eq!(scored.score, 60.0);
}

#[test]
fn no_participants_is_degenerate_but_defined() {
    // Callers must validate participant lists; the engine still produces a
    // deterministic result on the empty list (the all-available bonus fires
    // vacuously).
    let scored = score_slot(&range(17, 12, 0, 30), &[]);
    assert_eq!(scored.score, 120.0);
}
