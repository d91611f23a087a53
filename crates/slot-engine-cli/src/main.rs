//! `slots` CLI — generate and inspect bookable slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Generate slots for a configuration (stdin → stdout, pretty JSON)
//! slots generate < availability.json
//!
//! # Generate from file to file, at a fixed point in time
//! slots generate -i availability.json -o slots.json --now 2023-12-12T06:30:00
//!
//! # Compact single-line JSON
//! slots generate -i availability.json --compact
//!
//! # List the anchored window occurrences for the horizon
//! slots windows -i availability.json --now 2023-12-12T06:30:00
//!
//! # Summary: date count, slot count, first/last bookable date
//! slots stats -i availability.json
//! ```
//!
//! Without `--now`, the current instant is taken in the configuration's
//! time zone — the one place the informational `timezone` field is
//! consulted.

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use slot_engine::{anchor_windows, generate_slots, AvailabilityConfig};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Bookable-slot generation from weekly availability configurations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bookable slots grouped by date
    Generate {
        /// Input configuration file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fixed "now" as YYYY-MM-DDTHH:MM[:SS] (defaults to the current
        /// time in the configuration's time zone)
        #[arg(long)]
        now: Option<String>,
        /// Emit compact single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// List the anchored window occurrences for the horizon
    Windows {
        /// Input configuration file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Fixed "now" as YYYY-MM-DDTHH:MM[:SS]
        #[arg(long)]
        now: Option<String>,
    },
    /// Show generation statistics for a configuration
    Stats {
        /// Input configuration file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Fixed "now" as YYYY-MM-DDTHH:MM[:SS]
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            now,
            compact,
        } => {
            let config = load_config(input.as_deref())?;
            let now = resolve_now(now.as_deref(), &config)?;

            let slots = generate_slots(now, &config);
            let json = if compact {
                serde_json::to_string(&slots)?
            } else {
                serde_json::to_string_pretty(&slots)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Windows { input, now } => {
            let config = load_config(input.as_deref())?;
            let now = resolve_now(now.as_deref(), &config)?;

            let anchored = anchor_windows(
                now,
                config.calendar_length_days,
                &config.availability_windows,
            );
            for occurrence in &anchored {
                println!(
                    "{} .. {}  ({})",
                    occurrence.start.format("%Y-%m-%d %H:%M"),
                    occurrence.end.format("%Y-%m-%d %H:%M"),
                    occurrence.window.from.weekday
                );
            }
        }
        Commands::Stats { input, now } => {
            let config = load_config(input.as_deref())?;
            let now = resolve_now(now.as_deref(), &config)?;

            let slots = generate_slots(now, &config);
            let total: usize = slots.values().map(Vec::len).sum();
            println!("Dates:       {}", slots.len());
            println!("Slots:       {}", total);
            match (slots.keys().next(), slots.keys().next_back()) {
                (Some(first), Some(last)) => {
                    println!("First date:  {}", first);
                    println!("Last date:   {}", last);
                }
                _ => {
                    println!("First date:  -");
                    println!("Last date:   -");
                }
            }
        }
    }

    Ok(())
}

/// Read and parse the configuration from a file or stdin.
fn load_config(path: Option<&str>) -> Result<AvailabilityConfig> {
    let json = read_input(path)?;
    AvailabilityConfig::from_json(&json).context("Failed to parse availability configuration")
}

/// Resolve the generation instant: an explicit `--now`, or the current time
/// in the configuration's time zone.
fn resolve_now(now: Option<&str>, config: &AvailabilityConfig) -> Result<NaiveDateTime> {
    match now {
        Some(raw) => parse_datetime(raw),
        None => {
            let tz = config
                .tz()
                .context("Cannot derive the current time without a valid timezone")?;
            Ok(Utc::now().with_timezone(&tz).naive_local())
        }
    }
}

/// Parse a wall-clock datetime, with or without seconds.
fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("Invalid datetime '{}', expected YYYY-MM-DDTHH:MM[:SS]", s))
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
