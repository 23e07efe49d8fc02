//! Block-level parser for the Markdown subset.
//!
//! The block parser is line-oriented and handles:
//! - ATX headings (`#` to `######`)
//! - Unordered list items (`- item`)
//! - Ordered list items (`* item`)
//! - Paragraphs (any other non-blank line)

mod classify;
mod event;
mod parser;

pub use classify::{classify_line, LineKind};
pub use event::{BlockEvent, ListKind};
pub use parser::BlockParser;
