//! Draft parser entry points
//!
//! The parser is a pure function of the utterance, the reference instant and
//! the options. Nothing is cached between calls, so one `DraftExtractor` can be
//! shared freely across threads.

pub mod natural_language;
pub mod utils;

use crate::draft::ParseOutcome;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

/// Zone used when the caller does not name one
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Seoul;
/// Event length used when the utterance carries no duration
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// What to do with a `M/D` date whose start has already passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastTimePolicy {
    /// Return the draft as parsed
    #[default]
    Keep,
    /// Move the date to the same month and day of the following year
    RollForward,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParserOptions {
    pub timezone: Tz,
    pub default_duration_minutes: i64,
    pub past_time_policy: PastTimePolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            past_time_policy: PastTimePolicy::default(),
        }
    }
}

/// Turns utterances into event drafts using a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct DraftExtractor {
    options: ParserOptions,
}

impl DraftExtractor {
    pub fn new(options: ParserOptions) -> Self {
        debug!("Creating draft extractor with {:?}", options);
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse one utterance relative to `now`
    pub fn parse(&self, input: &str, now: DateTime<Utc>) -> ParseOutcome {
        natural_language::extract_draft(input, now, &self.options)
    }
}

/// Parse one utterance with the default options in zone `tz`
pub fn parse_to_draft(input: &str, now: DateTime<Utc>, tz: Tz) -> ParseOutcome {
    let options = ParserOptions { timezone: tz, ..Default::default() };
    natural_language::extract_draft(input, now, &options)
}
