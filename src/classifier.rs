//! Line classification
//!
//! Decides which block a single source line starts or continues. `*` marks an
//! ordered item and `-` an unordered one.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern is valid"));

const ORDERED_MARKER: &str = "* ";
const UNORDERED_MARKER: &str = "- ";

/// The block kind of one trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Text following the `* ` marker
    OrderedItem(&'a str),
    /// Text following the `- ` marker
    UnorderedItem(&'a str),
    Heading { level: u8, content: &'a str },
    /// The whole line, trailing whitespace removed
    PlainText(&'a str),
}

/// Classify a raw input line.
///
/// Trailing whitespace and line terminators are stripped before matching.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix(ORDERED_MARKER) {
        return LineKind::OrderedItem(rest);
    }
    if let Some(rest) = line.strip_prefix(UNORDERED_MARKER) {
        return LineKind::UnorderedItem(rest);
    }
    if let Some(caps) = HEADING.captures(line) {
        if let (Some(hashes), Some(content)) = (caps.get(1), caps.get(2)) {
            return LineKind::Heading {
                level: hashes.as_str().len() as u8,
                content: content.as_str().trim(),
            };
        }
    }
    LineKind::PlainText(line)
}
