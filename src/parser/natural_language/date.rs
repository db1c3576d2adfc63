//! Date resolution stage

use super::patterns::{self, Span};
use crate::draft::DraftError;
use chrono::{Datelike, Days, NaiveDate};
use log::debug;

/// Which form produced the date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    Today,
    Tomorrow,
    DayAfterTomorrow,
    /// `YYYY-M-D`
    FullDate,
    /// `M/D`, year taken from the reference date
    MonthDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub date: NaiveDate,
    pub form: DateForm,
    pub span: Span,
}

/// Resolve the calendar date named in `text`, relative to `reference`.
///
/// Keywords are checked before numeric dates, and only the first form that
/// matches is used.
pub fn resolve_date(text: &str, reference: NaiveDate) -> Result<DateMatch, DraftError> {
    let keywords = [
        (patterns::TODAY, DateForm::Today, 0),
        (patterns::TOMORROW, DateForm::Tomorrow, 1),
        (patterns::DAY_AFTER_TOMORROW, DateForm::DayAfterTomorrow, 2),
    ];
    for (keyword, form, offset) in keywords {
        if let Some(pos) = text.find(keyword) {
            let date = reference
                .checked_add_days(Days::new(offset))
                .ok_or(DraftError::DateNotUnderstood)?;
            debug!("Date keyword '{}' -> {}", keyword, date);
            return Ok(DateMatch { date, form, span: pos..pos + keyword.len() });
        }
    }

    if let Some(caps) = patterns::FULL_DATE.captures(text) {
        let year: i32 = parse_number(&caps[1])?;
        let month: u32 = parse_number(&caps[2])?;
        let day: u32 = parse_number(&caps[3])?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DraftError::DateNotUnderstood)?;
        debug!("Full date '{}' -> {}", &caps[0], date);
        let span = caps.get(0).map_or(0..0, |m| m.range());
        return Ok(DateMatch { date, form: DateForm::FullDate, span });
    }

    if let Some(caps) = patterns::PARTIAL_DATE.captures(text) {
        let month: u32 = parse_number(&caps[1])?;
        let day: u32 = parse_number(&caps[2])?;
        let date = NaiveDate::from_ymd_opt(reference.year(), month, day)
            .ok_or(DraftError::DateNotUnderstood)?;
        debug!("Month/day '{}' -> {}", &caps[0], date);
        let span = caps.get(0).map_or(0..0, |m| m.range());
        return Ok(DateMatch { date, form: DateForm::MonthDay, span });
    }

    debug!("No date token in '{}'", text);
    Err(DraftError::DateNotUnderstood)
}

fn parse_number<T: std::str::FromStr>(digits: &str) -> Result<T, DraftError> {
    digits.parse().map_err(|_| DraftError::DateNotUnderstood)
}
