//! Block-level event types.

use crate::Range;

/// Events emitted by the block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a paragraph.
    ParagraphStart,
    /// End of a paragraph.
    ParagraphEnd,

    /// Start of a heading.
    HeadingStart {
        /// Heading level (1-6).
        level: u8,
    },
    /// End of a heading.
    HeadingEnd {
        /// Heading level (1-6).
        level: u8,
    },

    /// Start of a list.
    ListStart {
        /// List type (ordered or unordered).
        kind: ListKind,
    },
    /// End of a list.
    ListEnd {
        /// List type (ordered or unordered).
        kind: ListKind,
    },

    /// Start of a list item.
    ListItemStart,
    /// End of a list item.
    ListItemEnd,

    /// Trimmed text content of the enclosing element.
    Text(Range),
}

/// Type of list.
///
/// Unordered items are marked with `-`, ordered items with `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`, rendered as `<ul>`.
    Unordered,
    /// `* item`, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    /// Line marker byte for this kind of list.
    pub const fn marker(self) -> u8 {
        match self {
            Self::Unordered => b'-',
            Self::Ordered => b'*',
        }
    }

    /// HTML tag name of the list container.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}
