//! Event draft types shared by the parser and its callers.
//!
//! A draft is the not-yet-persisted candidate event produced from one utterance.
//! The calendar-write side consumes it as JSON (`title`, `startISO`, `endISO`,
//! `location`).

use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// Title used when nothing is left of the utterance after token removal
pub const DEFAULT_TITLE: &str = "새 일정";

/// Reasons a draft could not be produced or edited.
///
/// The messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("입력된 내용이 없습니다.")]
    EmptyInput,
    #[error("날짜를 이해하지 못했어요. 예: '오늘', '내일', '2/20'")]
    DateNotUnderstood,
    #[error("시간을 이해하지 못했어요. 예: '오후 3시', '15:30'")]
    TimeNotUnderstood,
    #[error("종료 시간이 시작 시간보다 늦어야 해요.")]
    InvalidRange,
    #[error("일정 제목을 입력해주세요.")]
    EmptyTitle,
    #[error("장소에는 공백을 넣을 수 없어요.")]
    InvalidLocation,
}

/// Result of a single parse call
pub type ParseOutcome = Result<EventDraft, DraftError>;

/// A structured calendar event candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    title: String,
    #[serde(rename = "startISO", serialize_with = "serialize_rfc3339")]
    start: DateTime<Tz>,
    #[serde(rename = "endISO", serialize_with = "serialize_rfc3339")]
    end: DateTime<Tz>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

/// Field-level edits applied to a draft before it is persisted.
///
/// `None` leaves a field untouched. For `location`, `Some("")` removes it.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
    pub location: Option<String>,
}

impl EventDraft {
    /// Build a draft, refusing values that break the draft invariants
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        location: Option<String>,
    ) -> Result<Self, DraftError> {
        let draft = Self { title: title.into(), start, end, location };
        draft.validate()?;
        Ok(draft)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Length of the event in whole minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Check the draft invariants: non-blank title, `end > start`, and a
    /// whitespace-free location token.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.end <= self.start {
            return Err(DraftError::InvalidRange);
        }
        if let Some(location) = &self.location {
            if location.is_empty() || location.chars().any(char::is_whitespace) {
                return Err(DraftError::InvalidLocation);
            }
        }
        Ok(())
    }

    /// Return a copy of this draft with `patch` applied.
    ///
    /// The edited draft is validated again, so an edit that puts the end
    /// before the start is refused.
    pub fn apply(&self, patch: DraftPatch) -> Result<Self, DraftError> {
        let mut edited = self.clone();
        if let Some(title) = patch.title {
            edited.title = title.trim().to_string();
        }
        if let Some(start) = patch.start {
            edited.start = start;
        }
        if let Some(end) = patch.end {
            edited.end = end;
        }
        if let Some(location) = patch.location {
            let location = location.trim();
            edited.location = if location.is_empty() { None } else { Some(location.to_string()) };
        }
        edited.validate()?;
        Ok(edited)
    }

    /// Serialize as the calendar-create payload
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_rfc3339<S: Serializer>(dt: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, false))
}
