//! Location resolution stage

use super::patterns::{self, Span};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub name: String,
    /// Span of the whole token, keyword or `@` included
    pub span: Span,
}

/// Find a `장소 TOKEN` or `@TOKEN` location; the keyword form wins
pub fn resolve_location(text: &str) -> Option<LocationMatch> {
    let caps = patterns::LOCATION_KEYWORD
        .captures(text)
        .or_else(|| patterns::LOCATION_AT.captures(text))?;
    let whole = caps.get(0)?;
    let name = caps.get(1)?.as_str().to_string();
    debug!("Location '{}' from '{}'", name, whole.as_str());
    Some(LocationMatch { name, span: whole.range() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_form() {
        let text = "오늘 14:00 2시간 회의 @회의실";
        let found = resolve_location(text).unwrap();
        assert_eq!(found.name, "회의실");
        assert_eq!(&text[found.span], "@회의실");
    }

    #[test]
    fn test_keyword_form_wins_over_at() {
        let found = resolve_location("@카페 내일 3시 장소 강남역, 친구").unwrap();
        assert_eq!(found.name, "강남역");
    }

    #[test]
    fn test_token_stops_at_comma_and_space() {
        assert_eq!(resolve_location("장소판교,2층").unwrap().name, "판교");
        assert_eq!(resolve_location("@ 본사 3층").unwrap().name, "본사");
    }

    #[test]
    fn test_absent_location() {
        assert!(resolve_location("내일 오후 3시 치과").is_none());
        assert!(resolve_location("메일 보내기 @").is_none());
    }
}
