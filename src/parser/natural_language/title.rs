//! Title extraction stage
//!
//! The title is what remains after cutting out the exact spans the other
//! stages used. Tokens that only look like a date or a time elsewhere in the
//! utterance stay in the title.

use super::patterns::Span;
use crate::draft::DEFAULT_TITLE;
use crate::parser::utils::collapse_whitespace;

/// Remove `spans` from `text` and tidy the rest into a title
pub fn extract_title(text: &str, spans: &[Span]) -> String {
    let mut sorted: Vec<Span> = spans.iter().filter(|s| !s.is_empty()).cloned().collect();
    sorted.sort_by_key(|s| s.start);

    let mut residual = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in sorted {
        if span.start > cursor {
            residual.push_str(&text[cursor..span.start]);
        }
        // Cut points become spaces so neighbouring words do not fuse
        residual.push(' ');
        cursor = cursor.max(span.end);
    }
    residual.push_str(&text[cursor..]);

    let title = collapse_whitespace(&residual);
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}
