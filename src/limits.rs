//! Hard limits of the converter.

/// Deepest heading level (`######`). Longer `#` runs are plain text.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Largest input accepted, bounded by the `u32` offsets in [`crate::Range`].
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;
