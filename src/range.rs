//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Supports documents up to 4GB in size.

/// Compact range into an input buffer.
///
/// # Example
/// ```
/// use mdline::Range;
///
/// let input = b"Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(input), b"Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }

    /// Try to get the slice as a str.
    #[inline]
    pub fn try_slice_str<'a>(&self, input: &'a [u8]) -> Result<&'a str, std::str::Utf8Error> {
        std::str::from_utf8(self.slice(input))
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Drop leading whitespace characters.
    pub fn trim_start(&self, input: &[u8]) -> Self {
        let bounded = &input[..self.end_usize()];
        let mut start = self.start_usize();
        while let Some(len) = space_len_at(bounded, start) {
            start += len;
        }
        Self::from_usize(start, self.end_usize())
    }

    /// Drop trailing whitespace characters.
    pub fn trim_end(&self, input: &[u8]) -> Self {
        let start = self.start_usize();
        let mut end = self.end_usize();
        while let Some(len) = space_len_before(input, start, end) {
            end -= len;
        }
        Self::from_usize(start, end)
    }
}

/// Whitespace as far as line classification is concerned: Unicode
/// `White_Space` plus the ASCII information separators `\x1c`..`\x1f`.
#[inline]
pub(crate) fn is_space_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Byte length of the whitespace character starting at `pos`, if any.
///
/// `pos` must be a character boundary; the character must end within `input`.
pub(crate) fn space_len_at(input: &[u8], pos: usize) -> Option<usize> {
    let lead = *input.get(pos)?;
    if lead < 0x80 {
        return is_space_char(lead as char).then_some(1);
    }
    let len = match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };
    let c = std::str::from_utf8(input.get(pos..pos + len)?).ok()?.chars().next()?;
    is_space_char(c).then_some(len)
}

/// Byte length of the whitespace character ending at `end`, not reaching
/// below `floor`.
pub(crate) fn space_len_before(input: &[u8], floor: usize, end: usize) -> Option<usize> {
    if end <= floor {
        return None;
    }
    let mut start = end - 1;
    while start > floor && end - start < 4 && input[start] & 0xC0 == 0x80 {
        start -= 1;
    }
    match space_len_at(&input[..end], start) {
        Some(len) if start + len == end => Some(len),
        _ => None,
    }
}
