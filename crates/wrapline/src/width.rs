//! Display Width Measurement
//!
//! Computes terminal cell widths for characters and strings based on UAX #11.
//! The rest of the crate treats these values as the single source of truth
//! for how many columns a glyph occupies on screen.

use unicode_width::UnicodeWidthChar;

/// Calculate the visual width of a character (based on UAX #11).
///
/// Return value:
/// - 1: Narrow character (ASCII, etc.)
/// - 2: Wide character (CJK, fullwidth, etc.)
/// - 0: Zero-width character (combining marks, ZWJ, control characters)
///
/// Control characters (including `'\n'` and `'\t'`) report 0. The caret-aware
/// wrapper rejects zero-width input outright; the word wrapper tolerates it by
/// letting such characters ride along without consuming columns.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Calculate the total visual width of a string.
///
/// Line break characters contribute no width, so a line's width can be
/// measured without first stripping a trailing `'\n'`.
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}
