//! HTML output writer.
//!
//! Output is a sequence of fragments (one per tag-level element) joined
//! by single newlines, with no trailing newline.

use crate::block::ListKind;
use crate::escape;
use crate::Range;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use mdline::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.heading_start(1);
/// writer.write_escaped_text(b"Fish & Chips");
/// writer.heading_end(1);
/// writer.paragraph_start();
/// writer.write_bytes(b"menu");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<h1>Fish &amp; Chips</h1>\n<p>menu</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
    /// Fragments started so far; every one but the first is preceded by `\n`.
    fragments: usize,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags roughly add a quarter on top of the input for typical documents.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            fragments: 0,
        }
    }

    /// Write raw bytes without escaping.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write text with HTML escaping (for text content).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write the text a range refers to, escaped or verbatim.
    #[inline]
    pub fn write_text_range(&mut self, input: &[u8], range: Range, escape_html: bool) {
        let text = range.slice(input);
        if escape_html {
            self.write_escaped_text(text);
        } else {
            self.write_bytes(text);
        }
    }

    /// Start a new output fragment.
    #[inline]
    pub fn begin_fragment(&mut self) {
        if self.fragments > 0 {
            self.out.push(b'\n');
        }
        self.fragments += 1;
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take ownership as String.
    ///
    /// Text is copied from `&str` input at ASCII boundaries, so the buffer
    /// is valid UTF-8 unless raw bytes were written through `write_bytes`.
    #[inline]
    pub fn into_string(self) -> String {
        String::from_utf8(self.out)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }

    /// Get mutable reference to internal buffer.
    ///
    /// Use with caution - allows bypassing escaping and fragment separation.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    // --- HTML Elements ---

    /// Start a paragraph fragment: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.begin_fragment();
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Start a heading fragment: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.begin_fragment();
        self.write_str("<h");
        self.write_byte(b'0' + level);
        self.write_byte(b'>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.write_byte(b'0' + level);
        self.write_byte(b'>');
    }

    /// Write a list opening fragment: `<ul>` or `<ol>`
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        self.begin_fragment();
        self.write_byte(b'<');
        self.write_str(kind.tag());
        self.write_byte(b'>');
    }

    /// Write a list closing fragment: `</ul>` or `</ol>`
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        self.begin_fragment();
        self.write_str("</");
        self.write_str(kind.tag());
        self.write_byte(b'>');
    }

    /// Start a list item fragment: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.begin_fragment();
        self.write_str("<li>");
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.fragments, 0);
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1250);
    }

    #[test]
    fn test_writer_escaped_text() {
        let mut writer = HtmlWriter::new();
        writer.write_escaped_text(b"<script>");
        assert_eq!(writer.as_bytes(), b"&lt;script&gt;");
    }

    #[test]
    fn test_writer_paragraph() {
        let mut writer = HtmlWriter::new();
        writer.paragraph_start();
        writer.write_bytes(b"Hello");
        writer.paragraph_end();
        assert_eq!(writer.into_string(), "<p>Hello</p>");
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=6 {
            let mut writer = HtmlWriter::new();
            writer.heading_start(level);
            writer.heading_end(level);
            assert_eq!(writer.into_string(), format!("<h{level}></h{level}>"));
        }
    }

    #[test]
    fn test_writer_list_fragments() {
        let mut writer = HtmlWriter::new();
        writer.list_start(ListKind::Ordered);
        writer.li_start();
        writer.write_bytes(b"one");
        writer.li_end();
        writer.list_end(ListKind::Ordered);
        assert_eq!(writer.into_string(), "<ol>\n<li>one</li>\n</ol>");
    }

    #[test]
    fn test_writer_no_trailing_newline() {
        let mut writer = HtmlWriter::new();
        writer.list_start(ListKind::Unordered);
        writer.list_end(ListKind::Unordered);
        assert_eq!(writer.as_bytes(), b"<ul>\n</ul>");
        assert_eq!(writer.fragments, 2);
    }

    #[test]
    fn test_writer_text_range() {
        let input = b"a < b";
        let mut writer = HtmlWriter::new();
        writer.write_text_range(input, Range::new(0, 5), false);
        writer.write_byte(b'|');
        writer.write_text_range(input, Range::new(0, 5), true);
        assert_eq!(writer.as_bytes(), b"a < b|a &lt; b");
    }

    #[test]
    fn test_writer_first_fragment_has_no_separator() {
        let mut writer = HtmlWriter::new();
        writer.begin_fragment();
        writer.write_bytes(b"raw");
        writer.li_start();
        writer.li_end();
        assert_eq!(writer.as_bytes(), b"raw\n<li></li>");
    }
}
