//! HTML escaping for text content.
//!
//! Fast-path optimized: scans for the first escapable character with
//! memchr, then bulk-copies segments between escapes.

use memchr::{memchr, memchr3};

/// Lookup table for escapable characters in text content.
/// Index by byte value, true if needs escaping.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into output buffer.
///
/// Escapes `<`, `>`, `&` and `"` to their HTML entity equivalents.
///
/// # Example
/// ```
/// use mdline::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"<script>");
/// assert_eq!(out, b"&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    let mut pos = match first_text_escape(input) {
        Some(p) => p,
        None => {
            out.extend_from_slice(input);
            return;
        }
    };

    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !TEXT_ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }
        out.extend_from_slice(&input[scan_start..pos]);

        if let Some(&b) = input.get(pos) {
            out.extend_from_slice(entity_for(b));
            pos += 1;
        }
    }
}

#[inline]
fn entity_for(b: u8) -> &'static [u8] {
    match b {
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'&' => b"&amp;",
        b'"' => b"&quot;",
        _ => unreachable!("byte {b:#x} is not in the escape table"),
    }
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    match (memchr3(b'<', b'>', b'&', input), memchr(b'"', input)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
