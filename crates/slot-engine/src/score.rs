//! Desirability scoring for candidate slots.
//!
//! The score starts at 100 and each rule adds or subtracts a fixed delta, in
//! a fixed evaluation order, with a floor at 0. The rule table is frozen —
//! the deltas and their order are part of the engine's contract and the test
//! suite asserts the exact numbers.

use crate::model::TimeRange;

/// Outcome of scoring one candidate slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotScore {
    pub score: f64,
    pub available: Vec<String>,
    pub conflicted: Vec<String>,
    pub reasoning: String,
}

/// Score a candidate range given each participant's conflict count in it.
///
/// `conflict_counts` pairs each participant id with the number of conflict
/// records the detector produced for them; the caller gathers those counts
/// (one detector query per participant). Evaluation order:
///
/// 1. Per participant: >=1 conflict costs 30 points per conflict and records
///    the participant as conflicted; 0 conflicts records them as available.
/// 2. All participants available: +20.
/// 3. Time of day (first match only): start hour 9-11 +15, 13-14 -10 (lunch),
///    16-17 -5, before 8 or after 18 -25.
/// 4. Day of week: Monday +5, Friday -5.
/// 5. Slot spanning two or more clock hours: -10.
///
/// The reasoning string concatenates every triggered rule's description with
/// "; " in evaluation order, or is "Standard slot" when no rule fired.
pub fn score_slot(range: &TimeRange, conflict_counts: &[(String, usize)]) -> SlotScore {
    let mut score = 100.0;
    let mut available = Vec::new();
    let mut conflicted = Vec::new();
    let mut reasons: Vec<String> = Vec::new();

    for (participant, conflicts) in conflict_counts {
        if *conflicts > 0 {
            conflicted.push(participant.clone());
            score -= (*conflicts as f64) * 30.0;
            reasons.push(format!("Conflicts for {}: {}", participant, conflicts));
        } else {
            available.push(participant.clone());
        }
    }

    if available.len() == conflict_counts.len() {
        score += 20.0;
        reasons.push("All participants available".to_string());
    }

    let hour = range.start_hour();
    if (9..=11).contains(&hour) {
        score += 15.0;
        reasons.push("Good morning time".to_string());
    } else if (13..=14).contains(&hour) {
        score -= 10.0;
        reasons.push("Lunch time penalty".to_string());
    } else if (16..=17).contains(&hour) {
        score -= 5.0;
        reasons.push("Late afternoon".to_string());
    } else if hour < 8 || hour > 18 {
        score -= 25.0;
        reasons.push("Outside normal hours".to_string());
    }

    match range.weekday() {
        chrono::Weekday::Mon => {
            score += 5.0;
            reasons.push("Monday energy".to_string());
        }
        chrono::Weekday::Fri => {
            score -= 5.0;
            reasons.push("Friday afternoon".to_string());
        }
        _ => {}
    }

    if range.end_hour() as i64 - range.start_hour() as i64 >= 2 {
        score -= 10.0;
        reasons.push("Long meeting".to_string());
    }

    SlotScore {
        score: score.max(0.0),
        available,
        conflicted,
        reasoning: if reasons.is_empty() {
            "Standard slot".to_string()
        } else {
            reasons.join("; ")
        },
    }
}
