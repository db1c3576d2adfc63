//! Time resolution stage
//!
//! Matching is lexical only. Hours are not range-checked here, so `25시`
//! comes back as hour 25 and is refused later when the instant is built.

use super::patterns::{self, Span};
use crate::draft::DraftError;
use log::debug;
use regex::Captures;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeForm {
    /// `오전`/`오후` + hour, optional minutes
    Meridiem,
    /// `H:M`, read as a 24-hour literal
    Colon,
    /// `H시 반`
    HalfPast,
    /// `H시`
    BareHour,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    pub hour: u32,
    pub minute: u32,
    pub form: TimeForm,
    pub span: Span,
}

/// Convert a 12-hour reading with a Korean meridiem marker to 24-hour form
fn convert_to_24_hour(hour: u32, meridiem: &str) -> u32 {
    match (hour, meridiem) {
        (12, "오전") => 0,
        (h, "오후") if h < 12 => h + 12,
        _ => hour,
    }
}

/// Resolve the clock time named in `text`
pub fn resolve_time(text: &str) -> Result<TimeMatch, DraftError> {
    if let Some(caps) = patterns::MERIDIEM_TIME.captures(text) {
        let hour = convert_to_24_hour(parse_number(&caps[2])?, &caps[1]);
        let minute = match (caps.get(3), caps.get(4)) {
            (Some(minutes), _) => parse_number(minutes.as_str())?,
            (None, Some(_half)) => 30,
            (None, None) => 0,
        };
        debug!("Meridiem time '{}' -> {:02}:{:02}", &caps[0], hour, minute);
        return Ok(build(&caps, hour, minute, TimeForm::Meridiem));
    }

    if let Some(caps) = patterns::COLON_TIME.captures(text) {
        let hour = parse_number(&caps[1])?;
        let minute = parse_number(&caps[2])?;
        debug!("Colon time '{}' -> {:02}:{:02}", &caps[0], hour, minute);
        return Ok(build(&caps, hour, minute, TimeForm::Colon));
    }

    if let Some(caps) = patterns::HALF_PAST.captures(text) {
        let hour = parse_number(&caps[1])?;
        debug!("Half past '{}' -> {:02}:30", &caps[0], hour);
        return Ok(build(&caps, hour, 30, TimeForm::HalfPast));
    }

    if let Some(caps) = patterns::BARE_HOUR.captures(text) {
        let hour = parse_number(&caps[1])?;
        debug!("Bare hour '{}' -> {:02}:00", &caps[0], hour);
        return Ok(build(&caps, hour, 0, TimeForm::BareHour));
    }

    debug!("No time token in '{}'", text);
    Err(DraftError::TimeNotUnderstood)
}

fn build(caps: &Captures<'_>, hour: u32, minute: u32, form: TimeForm) -> TimeMatch {
    let span = caps.get(0).map_or(0..0, |m| m.range());
    TimeMatch { hour, minute, form, span }
}

fn parse_number(digits: &str) -> Result<u32, DraftError> {
    digits.parse().map_err(|_| DraftError::TimeNotUnderstood)
}
