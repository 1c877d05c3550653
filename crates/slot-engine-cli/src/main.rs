//! `slots` CLI — query appointment availability from a booking snapshot.
//!
//! Bookings are read as a JSON array of
//! `{"date": "YYYY-MM-DD", "start": "HH:MM", "end": "HH:MM", "status": "..."}`.
//!
//! ## Usage
//!
//! ```sh
//! # Start times for a 2-hour job on a given day (stdin → stdout)
//! cat bookings.json | slots starts --date 2026-03-16
//!
//! # 60-minute jobs, business hours from a config file, JSON output
//! slots starts -i bookings.json --date 2026-03-16 --duration 60 --config slots.toml --json
//!
//! # End times for a job starting at 09:00
//! slots ends -i bookings.json --date 2026-03-16 --start 09:00
//!
//! # Re-check a proposed booking before saving it
//! slots conflicts -i bookings.json --date 2026-03-16 --start 09:00 --end 11:00
//!
//! # Dashboard counts
//! slots stats -i bookings.json --today 2026-03-18
//! ```
//!
//! Set `RUST_LOG=debug` to see diagnostics on stderr.

mod config;

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::stats::ServiceStatistics;
use slot_engine::{
    available_end_options, available_start_slots, find_conflicts, BookingSource, DatedBooking,
    InMemoryBookings, TimeOfDay,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::SlotArgs;

#[derive(Parser)]
#[command(name = "slots", version, about = "Appointment availability calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List start times that fit a job of the given duration
    Starts {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Calendar day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Required continuous job length in minutes
        #[arg(long)]
        duration: Option<u32>,
        #[command(flatten)]
        slots: SlotArgs,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// List end times for a job starting at --start
    Ends {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Calendar day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Chosen start time (HH:MM)
        #[arg(long)]
        start: TimeOfDay,
        #[command(flatten)]
        slots: SlotArgs,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// List blocking bookings that overlap a proposed interval
    Conflicts {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Calendar day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Proposed start (HH:MM)
        #[arg(long)]
        start: TimeOfDay,
        /// Proposed end (HH:MM)
        #[arg(long)]
        end: TimeOfDay,
    },
    /// Show service counts by status and period
    Stats {
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference day for week/month counts (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Starts {
            input,
            date,
            duration,
            slots,
            json,
        } => {
            let store = load_bookings(input.as_deref())?;
            let options = slots.resolve(duration)?;
            let starts = available_start_slots(&store, date, &options)
                .with_context(|| format!("Failed to compute start slots for {}", date))?;
            info!(%date, count = starts.len(), "start slots");
            print_times(&starts, json)?;
        }
        Commands::Ends {
            input,
            date,
            start,
            slots,
            json,
        } => {
            let store = load_bookings(input.as_deref())?;
            let options = slots.resolve(None)?;
            let ends = available_end_options(&store, date, start, &options)
                .with_context(|| format!("Failed to compute end options for {} {}", date, start))?;
            info!(%date, %start, count = ends.len(), "end options");
            print_times(&ends, json)?;
        }
        Commands::Conflicts {
            input,
            date,
            start,
            end,
        } => {
            if end <= start {
                anyhow::bail!("--end {} must be after --start {}", end, start);
            }
            let store = load_bookings(input.as_deref())?;
            let Ok(day) = store.bookings_for(date);
            let hits = find_conflicts(&day, start, end);
            info!(%date, %start, %end, count = hits.len(), "conflicts");
            for b in hits {
                println!("{}-{} {}", b.start, b.end, b.status);
            }
        }
        Commands::Stats { input, today, json } => {
            let store = load_bookings(input.as_deref())?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let stats = ServiceStatistics::compute(store.all(), today);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Total:       {}", stats.total);
                println!("Scheduled:   {}", stats.scheduled);
                println!("Completed:   {}", stats.completed);
                println!("Cancelled:   {}", stats.cancelled);
                println!("This week:   {}", stats.this_week);
                println!("This month:  {}", stats.this_month);
            }
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_bookings(path: Option<&str>) -> Result<InMemoryBookings> {
    let raw = read_input(path)?;
    let bookings: Vec<DatedBooking> =
        serde_json::from_str(&raw).context("Failed to parse bookings JSON")?;
    info!(count = bookings.len(), "loaded bookings");
    Ok(InMemoryBookings::new(bookings))
}

fn print_times<T: Serialize + std::fmt::Display>(times: &[T], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(times)?);
    } else {
        for t in times {
            println!("{}", t);
        }
    }
    Ok(())
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
