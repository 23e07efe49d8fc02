//! Line classification.
//!
//! Every line is exactly one of heading, list item or plain content,
//! checked in that order. Markers must sit in column 0 and be followed
//! by at least one whitespace character; a bare marker is plain content.
//! Whitespace is Unicode whitespace, so `#\u{a0}Title` is a heading.

use crate::cursor::Cursor;
use crate::limits::MAX_HEADING_LEVEL;
use crate::Range;

use super::event::ListKind;

/// What a single input line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#`..`######` followed by whitespace and text.
    Heading {
        /// Number of leading `#`.
        level: u8,
        /// Trimmed heading text.
        text: Range,
    },
    /// `- text` or `* text`.
    ListItem {
        /// Which list the marker opens or continues.
        kind: ListKind,
        /// Trimmed item text.
        text: Range,
    },
    /// Anything else. The text is trimmed and may be empty.
    Plain(Range),
}

/// Classify one line of `input`.
///
/// `line` excludes the line terminator. Trailing whitespace is ignored.
///
/// # Example
/// ```
/// use mdline::block::{classify_line, LineKind};
/// use mdline::Range;
///
/// let input = b"### Title";
/// match classify_line(input, Range::new(0, input.len() as u32)) {
///     LineKind::Heading { level, text } => {
///         assert_eq!(level, 3);
///         assert_eq!(text.slice(input), b"Title");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn classify_line(input: &[u8], line: Range) -> LineKind {
    let line = line.trim_end(input);

    if let Some((level, text)) = try_heading(input, line) {
        return LineKind::Heading { level, text };
    }

    for kind in [ListKind::Unordered, ListKind::Ordered] {
        if let Some(text) = try_list_item(input, line, kind) {
            return LineKind::ListItem { kind, text };
        }
    }

    LineKind::Plain(line.trim_start(input))
}

fn try_heading(input: &[u8], line: Range) -> Option<(u8, Range)> {
    let mut cursor = Cursor::over(input, line);
    let level = cursor.skip_while(|b| b == b'#');
    if level == 0 || level > MAX_HEADING_LEVEL as usize {
        return None;
    }
    marker_text(cursor).map(|text| (level as u8, text))
}

fn try_list_item(input: &[u8], line: Range, kind: ListKind) -> Option<Range> {
    let mut cursor = Cursor::over(input, line);
    if !cursor.eat(kind.marker()) {
        return None;
    }
    marker_text(cursor)
}

/// Text after a marker: requires separating whitespace, then takes the rest.
fn marker_text(mut cursor: Cursor<'_>) -> Option<Range> {
    if cursor.skip_whitespace() == 0 || cursor.is_eof() {
        return None;
    }
    Some(cursor.rest())
}
