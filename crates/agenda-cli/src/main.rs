//! `agenda` CLI — run scheduling operations over a JSON event list.
//!
//! Input is a JSON array of `{"title", "start", "end"}` objects with naive
//! ISO-8601 timestamps, read from a file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Admit events one by one, printing each add's status line
//! agenda check -i events.json
//!
//! # Print the admitted events sorted by start time
//! agenda list -i events.json
//!
//! # Earliest free 30-minute slot after a reference time
//! agenda suggest -i events.json --duration 30 --after 2026-03-01T09:00:00
//!
//! # Free slots within a window (raw events, overlaps merged)
//! echo '[{"title":"A","start":"2026-03-01T10:00:00","end":"2026-03-01T11:00:00"}]' \
//!   | agenda free --from 2026-03-01T08:00:00 --to 2026-03-01T17:00:00
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use agenda_core::{find_free_slots, Event, Scheduler};

#[derive(Parser)]
#[command(name = "agenda", version, about = "In-memory event scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed events through the scheduler in input order, printing each status
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the admitted events sorted by start time, as JSON
    List {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Suggest the earliest free slot of the given duration
    Suggest {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Slot length in minutes
        #[arg(short, long)]
        duration: i64,
        /// Reference time (naive ISO-8601); defaults to now
        #[arg(short, long)]
        after: Option<NaiveDateTime>,
    },
    /// List free slots within a time window, as JSON
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Window start (naive ISO-8601)
        #[arg(long)]
        from: NaiveDateTime,
        /// Window end (naive ISO-8601)
        #[arg(long)]
        to: NaiveDateTime,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let events = load_events(input.as_deref())?;
            let mut sched = Scheduler::new();
            for e in events {
                println!("{}", sched.add(e.title, e.start, e.end));
            }
        }
        Commands::List { input } => {
            let events = load_events(input.as_deref())?;
            let sched = admit(events);
            let json = serde_json::to_string_pretty(&sched.list_events())?;
            println!("{}", json);
        }
        Commands::Suggest {
            input,
            duration,
            after,
        } => {
            let events = load_events(input.as_deref())?;
            let sched = admit(events);
            let suggested = sched.suggest_time(duration, after);
            println!("{}", suggested.format("%Y-%m-%dT%H:%M:%S"));
        }
        Commands::Free { input, from, to } => {
            let events = load_events(input.as_deref())?;
            let slots = find_free_slots(&events, from, to);
            let json = serde_json::to_string_pretty(&slots)?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Build a scheduler from raw events, dropping the ones that conflict.
///
/// Conflicting entries are reported on stderr so `list` and `suggest` stay
/// honest about what they operate on.
fn admit(events: Vec<Event>) -> Scheduler {
    let mut sched = Scheduler::new();
    for e in events {
        let title = e.title.clone();
        let msg = sched.add(e.title, e.start, e.end);
        if msg != "Event added successfully!" {
            eprintln!("Skipping '{}': {}", title, msg);
        }
    }
    sched
}

/// Read and parse the event list from a file or stdin.
fn load_events(path: Option<&str>) -> Result<Vec<Event>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse event list JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
