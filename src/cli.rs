use crate::draft::DraftPatch;
use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;

/// kocal - turn a short Korean sentence into a calendar event draft
#[derive(Debug, Parser)]
#[command(name = "kocal")]
#[command(about = "Turn a short Korean sentence into a calendar event draft", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Sentence to parse, e.g. 내일 오후 3시 치과 (interactive prompt if omitted)
    pub text: Vec<String>,

    /// Reference instant, RFC 3339 or YYYY-MM-DDTHH:MM[:SS] in the chosen zone
    #[arg(long)]
    pub now: Option<String>,

    /// IANA timezone, overrides the config file
    #[arg(long)]
    pub tz: Option<String>,

    /// Print the calendar-create payload as JSON
    #[arg(long)]
    pub json: bool,

    /// Replace the extracted title
    #[arg(long)]
    pub title: Option<String>,

    /// Replace the extracted location (empty string removes it)
    #[arg(long)]
    pub location: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The words of the sentence joined back together
    pub fn utterance(&self) -> String {
        self.text.join(" ")
    }

    /// Edits requested on the command line
    pub fn patch(&self) -> DraftPatch {
        DraftPatch {
            title: self.title.clone(),
            location: self.location.clone(),
            ..Default::default()
        }
    }
}

/// Parse a `--now` value. Offsets in the value win; naive values are read in `tz`.
pub fn parse_reference_instant(value: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| anyhow!("Invalid --now value '{}', expected e.g. 2024-03-10T09:00", value))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("'{}' does not exist in {}", value, tz.name()))
}
