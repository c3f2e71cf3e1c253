//! `slots` CLI — run the scheduling engine against a meetings JSON file.
//!
//! ## Usage
//!
//! ```sh
//! # Rank the best meeting times for two people over a window
//! slots find -m meetings.json -p alice,bob -d 30 \
//!     --from 2026-03-16T00:00:00 --to 2026-03-20T00:00:00
//!
//! # Classify conflicts for one person against a proposed range
//! slots conflicts -m meetings.json -u alice \
//!     --from 2026-03-16T09:15:00 --to 2026-03-16T09:45:00
//!
//! # Per-day meeting load
//! slots density -m meetings.json -u alice --date 2026-03-16
//!
//! # Alternatives to a conflicting proposal
//! slots suggest -m meetings.json -p alice,bob -d 30 \
//!     --start 2026-03-16T10:00:00
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;

use slot_engine::{
    InMemoryMeetingRepository, Meeting, SchedulingEngine, SchedulingPreferences,
};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Meeting slot search, conflict detection, and density analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the top-ranked meeting slots for a set of participants
    Find {
        /// JSON file holding the existing meetings
        #[arg(short, long)]
        meetings: String,
        /// Comma-separated participant ids
        #[arg(short, long, value_delimiter = ',')]
        participants: Vec<String>,
        /// Meeting duration in minutes
        #[arg(short, long)]
        duration: i64,
        /// Window start (e.g. 2026-03-16T00:00:00)
        #[arg(long)]
        from: NaiveDateTime,
        /// Window end, exclusive
        #[arg(long)]
        to: NaiveDateTime,
        /// Preferred start of day, HH:MM (default 09:00)
        #[arg(long)]
        preferred_start: Option<String>,
        /// Preferred end of day, HH:MM (default 17:00)
        #[arg(long)]
        preferred_end: Option<String>,
    },
    /// Classify conflicts between a proposed range and a person's meetings
    Conflicts {
        #[arg(short, long)]
        meetings: String,
        /// User id to check
        #[arg(short, long)]
        user: String,
        #[arg(long)]
        from: NaiveDateTime,
        #[arg(long)]
        to: NaiveDateTime,
    },
    /// Meeting density metrics for one person on one date
    Density {
        #[arg(short, long)]
        meetings: String,
        #[arg(short, long)]
        user: String,
        /// Date to analyze (e.g. 2026-03-16)
        #[arg(long)]
        date: NaiveDate,
    },
    /// Suggest alternative times for a conflicting proposal
    Suggest {
        #[arg(short, long)]
        meetings: String,
        #[arg(short, long, value_delimiter = ',')]
        participants: Vec<String>,
        #[arg(short, long)]
        duration: i64,
        /// Originally proposed start time
        #[arg(long)]
        start: NaiveDateTime,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            meetings,
            participants,
            duration,
            from,
            to,
            preferred_start,
            preferred_end,
        } => {
            let engine = load_engine(&meetings)?;
            let prefs = build_preferences(preferred_start, preferred_end);
            let slots = engine.find_optimal_slots(&participants, duration, from, to, prefs.as_ref())?;
            print_json(&slots)
        }
        Commands::Conflicts {
            meetings,
            user,
            from,
            to,
        } => {
            let engine = load_engine(&meetings)?;
            let conflicts = engine.detect_conflicts(&user, from, to)?;
            print_json(&conflicts)
        }
        Commands::Density {
            meetings,
            user,
            date,
        } => {
            let engine = load_engine(&meetings)?;
            let report = engine.meeting_density(&user, date)?;
            print_json(&report)
        }
        Commands::Suggest {
            meetings,
            participants,
            duration,
            start,
        } => {
            let engine = load_engine(&meetings)?;
            let alternatives = engine.suggest_alternatives(start, duration, &participants)?;
            print_json(&alternatives)
        }
    }
}

fn load_engine(path: &str) -> Result<SchedulingEngine<InMemoryMeetingRepository>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read meetings file: {}", path))?;
    let meetings: Vec<Meeting> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse meetings JSON: {}", path))?;
    Ok(SchedulingEngine::new(InMemoryMeetingRepository::new(
        meetings,
    )))
}

/// Build preferences only when the caller overrides a working-hours bound.
fn build_preferences(
    preferred_start: Option<String>,
    preferred_end: Option<String>,
) -> Option<SchedulingPreferences> {
    if preferred_start.is_none() && preferred_end.is_none() {
        return None;
    }
    let mut prefs = SchedulingPreferences::default();
    if let Some(start) = preferred_start {
        prefs.preferred_start_time = start;
    }
    if let Some(end) = preferred_end {
        prefs.preferred_end_time = end;
    }
    Some(prefs)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", pretty);
    Ok(())
}
