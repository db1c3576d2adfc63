//! Pattern table for the extraction stages
//!
//! Each stage tries its patterns in the order listed here and keeps the first
//! hit. Stages run over the same input independently, so one token can feed
//! two stages (`2시간` is both the hour `2시` and a two-hour length).
//! Overlapping spans are merged when `title` cuts them out.
//!
//! | stage    | order | pattern                                      |
//! |----------|-------|----------------------------------------------|
//! | date     | 1-3   | `오늘`, `내일`, `모레`                         |
//! | date     | 4     | `YYYY-M-D`                                   |
//! | date     | 5     | `M/D`                                        |
//! | time     | 1     | `오전`/`오후` + `H시` + optional `M분` or `반`  |
//! | time     | 2     | `H:M`                                        |
//! | time     | 3     | `H시 반`                                      |
//! | time     | 4     | `H시`                                         |
//! | duration | 1     | `N시간`                                       |
//! | duration | 2     | `N분`                                         |
//! | location | 1     | `장소 TOKEN`                                  |
//! | location | 2     | `@TOKEN`                                     |

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Byte range of a token within the input text
pub type Span = Range<usize>;

pub const TODAY: &str = "오늘";
pub const TOMORROW: &str = "내일";
pub const DAY_AFTER_TOMORROW: &str = "모레";

pub static FULL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})").expect("valid full date pattern"));
pub static PARTIAL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})").expect("valid partial date pattern"));

// Minutes only count when spelled with 분, otherwise "오후 3시 2시간" would
// read the duration as a minute.
pub static MERIDIEM_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(오전|오후)\s*(\d{1,2})시(?:\s*(\d{1,2})분|\s*(반))?")
        .expect("valid meridiem pattern")
});
pub static COLON_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{1,2})").expect("valid colon time pattern"));
pub static HALF_PAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})시\s*반").expect("valid half past pattern"));
pub static BARE_HOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})시").expect("valid bare hour pattern"));

pub static HOUR_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*시간").expect("valid hour count pattern"));
pub static MINUTE_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*분").expect("valid minute count pattern"));

pub static LOCATION_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"장소\s*([^\s,]+)").expect("valid location keyword pattern"));
pub static LOCATION_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\s*([^\s,]+)").expect("valid location @ pattern"));
