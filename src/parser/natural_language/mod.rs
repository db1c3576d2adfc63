//! Rule-based extraction of an event draft from a Korean utterance
//!
//! Five stages scan the same text: date, time, duration, location and title.
//! Date and time are required and fail fast in that order. Duration and
//! location are optional. The title is whatever the other stages did not use.

pub mod date;
pub mod duration;
pub mod location;
pub mod patterns;
pub mod time;
pub mod title;

use crate::draft::{DraftError, EventDraft, ParseOutcome};
use crate::parser::utils::sanitize_user_input;
use crate::parser::{ParserOptions, PastTimePolicy};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use date::{DateForm, DateMatch};
use log::debug;
use time::TimeMatch;

/// Run every stage over `input` and combine the results into a draft
pub fn extract_draft(input: &str, now: DateTime<Utc>, options: &ParserOptions) -> ParseOutcome {
    let sanitized = sanitize_user_input(input);
    let text = sanitized.trim();
    if text.is_empty() {
        return Err(DraftError::EmptyInput);
    }

    let tz = options.timezone;
    let reference = now.with_timezone(&tz);
    debug!("Parsing '{}' relative to {}", text, reference);

    let date = date::resolve_date(text, reference.date_naive())?;
    let clock = time::resolve_time(text)?;
    let duration = duration::resolve_duration(text, options.default_duration_minutes);
    let location = location::resolve_location(text);

    let mut used = vec![date.span.clone(), clock.span.clone()];
    used.extend(duration.span.clone());
    used.extend(location.as_ref().map(|l| l.span.clone()));
    let title = title::extract_title(text, &used);

    let start = resolve_start(&date, &clock, tz, now, options.past_time_policy)?;
    let end = duration
        .minutes
        .and_then(TimeDelta::try_minutes)
        .and_then(|length| start.checked_add_signed(length))
        .ok_or(DraftError::InvalidRange)?;
    if end <= start {
        debug!("Rejecting range {} .. {}", start, end);
        return Err(DraftError::InvalidRange);
    }

    EventDraft::new(title, start, end, location.map(|l| l.name))
}

/// Place the clock time on the resolved date, applying the past-time policy
fn resolve_start(
    date: &DateMatch,
    clock: &TimeMatch,
    tz: Tz,
    now: DateTime<Utc>,
    policy: PastTimePolicy,
) -> Result<DateTime<Tz>, DraftError> {
    let start = local_instant(date.date, clock, tz)?;
    if policy != PastTimePolicy::RollForward
        || date.form != DateForm::MonthDay
        || start.with_timezone(&Utc) > now
    {
        return Ok(start);
    }

    // Only `M/D` borrowed its year from the reference date
    match date.date.with_year(date.date.year() + 1) {
        Some(next) => {
            debug!("{} already passed, rolling to {}", start, next);
            local_instant(next, clock, tz)
        }
        None => Ok(start),
    }
}

fn local_instant(date: NaiveDate, clock: &TimeMatch, tz: Tz) -> Result<DateTime<Tz>, DraftError> {
    let time = NaiveTime::from_hms_opt(clock.hour, clock.minute, 0)
        .ok_or(DraftError::TimeNotUnderstood)?;
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or(DraftError::TimeNotUnderstood)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Seoul;

    fn seoul_now(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Seoul.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().with_timezone(&Utc)
    }

    fn seoul(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        Seoul.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_reference_date_is_taken_in_the_configured_zone() {
        // 2024-03-10 00:00 in Seoul is still 2024-03-09 in UTC
        let draft = extract_draft("오늘 10시 회의", seoul_now(2024, 3, 10, 0), &ParserOptions::default())
            .unwrap();
        assert_eq!(draft.start(), seoul(2024, 3, 10, 10, 0));
    }

    #[test]
    fn test_out_of_range_clock_is_not_understood() {
        let options = ParserOptions::default();
        let now = seoul_now(2024, 3, 10, 0);
        assert_eq!(extract_draft("오늘 25시", now, &options), Err(DraftError::TimeNotUnderstood));
        assert_eq!(extract_draft("오늘 10:75", now, &options), Err(DraftError::TimeNotUnderstood));
    }

    #[test]
    fn test_zero_duration_is_an_invalid_range() {
        let result = extract_draft("오늘 10시 0분 회의", seoul_now(2024, 3, 10, 0), &ParserOptions::default());
        assert_eq!(result, Err(DraftError::InvalidRange));
    }

    #[test]
    fn test_huge_duration_is_an_invalid_range() {
        let result = extract_draft(
            "오늘 10시 99999999999999999시간",
            seoul_now(2024, 3, 10, 0),
            &ParserOptions::default(),
        );
        assert_eq!(result, Err(DraftError::InvalidRange));
    }

    #[test]
    fn test_control_characters_are_ignored() {
        let draft = extract_draft("내일\u{0000} 오후 3시 치과", seoul_now(2024, 3, 10, 0), &ParserOptions::default())
            .unwrap();
        assert_eq!(draft.title(), "치과");
    }

    #[test]
    fn test_roll_forward_moves_past_month_day_to_next_year() {
        let options = ParserOptions { past_time_policy: PastTimePolicy::RollForward, ..Default::default() };
        let now = seoul_now(2024, 3, 10, 12);

        let past = extract_draft("1/5 10시 신년회", now, &options).unwrap();
        assert_eq!(past.start(), seoul(2025, 1, 5, 10, 0));

        let earlier_today = extract_draft("3/10 9시 조회", now, &options).unwrap();
        assert_eq!(earlier_today.start(), seoul(2025, 3, 10, 9, 0));

        let future = extract_draft("3/10 15시 리뷰", now, &options).unwrap();
        assert_eq!(future.start(), seoul(2024, 3, 10, 15, 0));
    }

    #[test]
    fn test_roll_forward_leaves_keywords_and_full_dates_alone() {
        let options = ParserOptions { past_time_policy: PastTimePolicy::RollForward, ..Default::default() };
        let now = seoul_now(2024, 3, 10, 12);

        let today = extract_draft("오늘 9시 조회", now, &options).unwrap();
        assert_eq!(today.start(), seoul(2024, 3, 10, 9, 0));

        let full = extract_draft("2023-1-5 10시 회고", now, &options).unwrap();
        assert_eq!(full.start(), seoul(2023, 1, 5, 10, 0));
    }

    #[test]
    fn test_keep_policy_returns_past_month_day_unchanged() {
        let draft = extract_draft("1/5 10시 신년회", seoul_now(2024, 3, 10, 12), &ParserOptions::default())
            .unwrap();
        assert_eq!(draft.start(), seoul(2024, 1, 5, 10, 0));
    }

    #[test]
    fn test_nonexistent_local_time_is_not_understood() {
        // Clocks in New York jump from 02:00 to 03:00 on 2024-03-10
        let options = ParserOptions { timezone: New_York, ..Default::default() };
        let now = New_York.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap().with_timezone(&Utc);
        assert_eq!(extract_draft("내일 2:30 회의", now, &options), Err(DraftError::TimeNotUnderstood));
    }

    #[test]
    fn test_custom_default_duration() {
        let options = ParserOptions { default_duration_minutes: 30, ..Default::default() };
        let draft = extract_draft("내일 오후 3시 치과", seoul_now(2024, 3, 10, 0), &options).unwrap();
        assert_eq!(draft.duration_minutes(), 30);
    }
}
