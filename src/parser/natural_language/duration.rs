//! Duration resolution stage
//!
//! Never fails: no duration token means the default length.

use super::patterns::{self, Span};
use log::debug;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationMatch {
    /// `None` when the count does not fit in an `i64` number of minutes
    pub minutes: Option<i64>,
    /// Span of the duration token, `None` when the default was used
    pub span: Option<Span>,
}

/// Resolve the event length in minutes.
///
/// Scans the whole text on its own, independent of the clock time. Hour
/// counts take priority over minute counts, so the `20분` of `오후 3시 20분`
/// is read as a length unless an `N시간` appears.
pub fn resolve_duration(text: &str, default_minutes: i64) -> DurationMatch {
    if let Some((count, span)) = first_count(&patterns::HOUR_COUNT, text) {
        let minutes = count.parse::<i64>().ok().and_then(|hours| hours.checked_mul(60));
        debug!("Hour count '{}' -> {:?} minutes", &text[span.clone()], minutes);
        return DurationMatch { minutes, span: Some(span) };
    }

    if let Some((count, span)) = first_count(&patterns::MINUTE_COUNT, text) {
        let minutes = count.parse::<i64>().ok();
        debug!("Minute count '{}' -> {:?} minutes", &text[span.clone()], minutes);
        return DurationMatch { minutes, span: Some(span) };
    }

    debug!("No duration token, using {} minutes", default_minutes);
    DurationMatch { minutes: Some(default_minutes), span: None }
}

fn first_count<'t>(pattern: &Regex, text: &'t str) -> Option<(&'t str, Span)> {
    let caps = pattern.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(0)?.range()))
}
