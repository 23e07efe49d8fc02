//! mdline: line-oriented Markdown subset to HTML converter
//!
//! Understands four kinds of line and nothing else:
//!
//! - `#` to `######` headings
//! - `- item` unordered list items
//! - `* item` ordered list items (a star, not a number)
//! - any other non-blank line, rendered as a paragraph
//!
//! There is no inline Markdown. Each tag-level element becomes one output
//! fragment and fragments are joined with `\n`.
//!
//! # Design Principles
//! - Single pass, one line at a time
//! - Streaming events, no AST
//! - Ranges into the input buffer instead of copied text

pub mod block;
pub mod convert;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod limits;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListKind};
pub use convert::convert_file;
pub use error::{Error, Result};
pub use range::Range;
pub use render::HtmlWriter;

/// How plain content lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphMode {
    /// `<p>text</p>`
    #[default]
    Wrap,
    /// The trimmed text on its own.
    Raw,
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Rendering of plain content lines.
    pub paragraphs: ParagraphMode,
    /// Escape `<`, `>`, `&` and `"` in text. Off by default: text is copied verbatim.
    pub escape_html: bool,
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Panics
/// Panics if `input` is longer than [`limits::MAX_INPUT_LEN`]. File input
/// goes through [`convert::read_markdown`], which reports that as
/// [`Error::InputTooLarge`] instead.
///
/// # Example
/// ```
/// let html = mdline::to_html("# Hi\n- a\n- b\n");
/// assert_eq!(html, "<h1>Hi</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
///
/// # Panics
/// Panics if `input` is longer than [`limits::MAX_INPUT_LEN`].
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    assert_input_fits(input.len());
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
///
/// # Panics
/// Panics if `input` is longer than [`limits::MAX_INPUT_LEN`].
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
///
/// # Panics
/// Panics if `input` is longer than [`limits::MAX_INPUT_LEN`].
pub fn to_html_into_with_options(input: &str, out: &mut Vec<u8>, options: &Options) {
    assert_input_fits(input.len());
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input.as_bytes(), &mut writer, options);
    std::mem::swap(writer.buffer_mut(), out);
}

/// Ranges are `u32`, so longer input cannot be addressed.
#[inline]
fn assert_input_fits(len: usize) {
    assert!(
        len <= limits::MAX_INPUT_LEN,
        "input of {len} bytes exceeds the {} byte limit",
        limits::MAX_INPUT_LEN
    );
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(input: &[u8], writer: &mut HtmlWriter, options: &Options) {
    let wrap = options.paragraphs == ParagraphMode::Wrap;

    for event in BlockParser::new(input) {
        match event {
            BlockEvent::HeadingStart { level } => writer.heading_start(level),
            BlockEvent::HeadingEnd { level } => writer.heading_end(level),
            BlockEvent::ListStart { kind } => writer.list_start(kind),
            BlockEvent::ListEnd { kind } => writer.list_end(kind),
            BlockEvent::ListItemStart => writer.li_start(),
            BlockEvent::ListItemEnd => writer.li_end(),
            BlockEvent::ParagraphStart => {
                if wrap {
                    writer.paragraph_start();
                } else {
                    writer.begin_fragment();
                }
            }
            BlockEvent::ParagraphEnd => {
                if wrap {
                    writer.paragraph_end();
                }
            }
            BlockEvent::Text(range) => writer.write_text_range(input, range, options.escape_html),
        }
    }
}
