//! Slot option loading: TOML file first, then command-line overrides.
//!
//! ```toml
//! [slots]
//! slot_minutes = 30
//! work_start = "08:00"
//! work_end = "18:00"
//! duration_minutes = 120
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use slot_engine::{SlotOptions, TimeOfDay};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    slots: SlotOptions,
}

/// Grid and business-hour flags shared by the `starts` and `ends` subcommands.
#[derive(Debug, Args)]
pub struct SlotArgs {
    /// TOML file with a [slots] table
    #[arg(long)]
    pub config: Option<String>,
    /// Grid step in minutes
    #[arg(long)]
    pub slot_minutes: Option<u32>,
    /// Start of business hours (HH:MM)
    #[arg(long)]
    pub work_start: Option<TimeOfDay>,
    /// End of business hours (HH:MM)
    #[arg(long)]
    pub work_end: Option<TimeOfDay>,
}

pub fn parse_config(text: &str) -> Result<SlotOptions> {
    let file: ConfigFile = toml::from_str(text).context("Invalid slot configuration")?;
    Ok(file.slots)
}

pub fn load_config(path: &Path) -> Result<SlotOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("In config file: {}", path.display()))
}

impl SlotArgs {
    /// Resolve options: defaults, then the config file, then flags.
    pub fn resolve(&self, duration_minutes: Option<u32>) -> Result<SlotOptions> {
        let mut options = match &self.config {
            Some(path) => load_config(Path::new(path))?,
            None => SlotOptions::default(),
        };

        if let Some(minutes) = self.slot_minutes {
            options.slot_minutes = minutes;
        }
        if let Some(start) = self.work_start {
            options.work_start = start;
        }
        if let Some(end) = self.work_end {
            options.work_end = end;
        }
        if let Some(minutes) = duration_minutes {
            options.duration_minutes = minutes;
        }

        debug!(?options, "resolved slot options");
        Ok(options)
    }
}
