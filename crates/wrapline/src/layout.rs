//! Caret-Aware Line Wrapping
//!
//! Reflows an editable buffer into lines of a fixed console width in one
//! left-to-right scan, tracking where a linear caret offset lands in the
//! wrapped row/column grid. Three concerns are reconciled simultaneously:
//! per-character display width (wide glyphs occupy two cells), explicit
//! breaks embedded in the buffer versus implicit breaks inserted because a
//! line filled up, and keeping the caret mapped onto the emitted layout as
//! breaks are inserted or suppressed.

use crate::buffer::CharSource;
use crate::line::{Position, WrappedLine, WrappedText};
use crate::pool;
use crate::width::char_width;
use tracing::trace;

/// The explicit line break character recognized by both wrappers.
pub const LINE_BREAK: char = '\n';

/// Wrap a buffer to `width` columns, resolving `caret` to a row/column
/// position in the wrapped layout.
///
/// A line breaks when an explicit `'\n'` is consumed, when the accumulated
/// display width reaches exactly `width`, or one cell early when the next
/// character is a wide glyph that would otherwise straddle the boundary.
/// An explicit break immediately following a line that filled to exactly
/// `width` is suppressed: the implicit break already performed the
/// linebreak, and honoring the `'\n'` as well would emit a spurious empty
/// line. Only the one character directly after the implicit break is
/// eligible for suppression.
///
/// An empty buffer yields a single empty line. A trailing explicit break
/// yields one further, empty line, so the last line never ends with `'\n'`.
/// When the caret sits past the last emitted line (the buffer ends exactly
/// at a break), a trailing empty line is appended for it.
///
/// Every produced line has display width `<= width`, with one documented
/// exception: a single glyph wider than `width` itself (only reachable at
/// `width == 1` with wide glyphs) cannot be split and occupies an
/// over-width line of its own.
///
/// # Panics
///
/// Panics when `width == 0`, when `caret` exceeds the buffer length, or when
/// the buffer contains a tab or zero-width character. Callers expand tabs
/// and filter non-printing input before wrapping, so any such character
/// reaching this path is a defect upstream, not a recoverable condition.
///
/// # Examples
///
/// ```rust
/// use wrapline::{Position, wrap};
///
/// let wrapped = wrap("hello", 5, 3);
/// let contents: Vec<&str> = wrapped.lines.iter().map(|l| l.content.as_str()).collect();
/// assert_eq!(contents, ["hel", "lo"]);
/// assert_eq!(wrapped.position, Position::new(1, 2));
/// ```
pub fn wrap<S: CharSource + ?Sized>(source: &S, caret: usize, width: usize) -> WrappedText {
    let len = source.len_chars();
    assert!(width >= 1, "target width must be at least 1");
    assert!(
        caret <= len,
        "caret {caret} out of bounds for buffer of {len} chars"
    );

    trace!(len, caret, width, "wrapping buffer");

    if len == 0 {
        return WrappedText {
            lines: vec![WrappedLine::new(0, String::new())],
            position: Position::new(0, caret),
        };
    }

    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut scratch = pool::line_pool().acquire();

    // Current line accumulator.
    let mut line_width = 0usize;
    let mut line_chars = 0usize;

    // Caret working coordinate, advanced as consumed characters and breaks
    // pass under it.
    let mut caret_row = 0usize;
    let mut caret_column = 0usize;

    // Whether the previous line ended because it filled to exactly `width`.
    let mut after_implicit_break = false;
    // Whether the most recently consumed character was an explicit break
    // (suppressed or not).
    let mut ends_with_break = false;

    let mut iter = source.chars().enumerate().peekable();
    while let Some((i, ch)) = iter.next() {
        assert!(
            ch != '\t',
            "tab at offset {i}: tabs must be expanded before wrapping"
        );
        let caret_past = caret > i;
        ends_with_break = ch == LINE_BREAK;

        if after_implicit_break {
            after_implicit_break = false;
            if ch == LINE_BREAK {
                // The implicit break already performed this linebreak; the
                // explicit break would duplicate it. Consume as a no-op: the
                // character joins no line and, being a control character,
                // advances no caret column.
                continue;
            }
        }

        let ch_width = char_width(ch);
        assert!(
            ch_width > 0 || ch == LINE_BREAK,
            "zero-width character U+{:04X} at offset {i} reached the caret-aware wrapper",
            ch as u32
        );

        scratch.push(ch);
        line_chars += 1;
        line_width += ch_width;
        if caret_past && !ch.is_control() {
            caret_column += 1;
        }

        let explicit = ch == LINE_BREAK;
        let next_is_wide = iter.peek().is_some_and(|&(_, next)| char_width(next) > 1);
        // `>=` rather than `==`: a glyph wider than the whole target (width 1,
        // wide glyph) overshoots the exact-fill mark and must still break.
        let break_now =
            explicit || line_width >= width || (next_is_wide && line_width == width - 1);

        if break_now {
            if caret_past {
                caret_row += 1;
                caret_column = 0;
            }
            let start = (i + 1) - line_chars;
            let line = WrappedLine::new(start, scratch.freeze());
            debug_assert_eq!(
                line.width, line_width,
                "accumulated width diverged from measured line width"
            );
            lines.push(line);
            after_implicit_break = !explicit && line_width >= width;
            line_width = 0;
            line_chars = 0;
        }
    }

    // Remainder, or the empty line following a trailing explicit break.
    if line_chars > 0 || ends_with_break {
        let start = len - line_chars;
        let line = WrappedLine::new(start, scratch.freeze());
        debug_assert_eq!(line.width, line_width);
        lines.push(line);
    }

    // Caret sitting past the last emitted line: give it a row of its own.
    if caret_row == lines.len() {
        lines.push(WrappedLine::new(len, String::new()));
    }

    trace!(lines = lines.len(), row = caret_row, "buffer wrapped");

    WrappedText {
        lines,
        position: Position::new(caret_row, caret_column),
    }
}

/// Wrap a plain string slice. Convenience delegation to [`wrap`].
pub fn wrap_str(text: &str, caret: usize, width: usize) -> WrappedText {
    wrap(text, caret, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(wrapped: &WrappedText) -> Vec<&str> {
        wrapped.lines.iter().map(|l| l.content.as_str()).collect()
    }

    #[test]
    fn test_empty_buffer() {
        let wrapped = wrap("", 0, 10);
        assert_eq!(contents(&wrapped), [""]);
        assert_eq!(wrapped.lines[0].start, 0);
        assert_eq!(wrapped.position, Position::new(0, 0));
    }

    #[test]
    fn test_simple_overflow() {
        let wrapped = wrap("hello", 5, 3);
        assert_eq!(contents(&wrapped), ["hel", "lo"]);
        assert_eq!(wrapped.lines[0].start, 0);
        assert_eq!(wrapped.lines[1].start, 3);
        assert_eq!(wrapped.position, Position::new(1, 2));
    }

    #[test]
    fn test_explicit_break_kept_in_content() {
        let wrapped = wrap("ab\ncd", 0, 10);
        assert_eq!(contents(&wrapped), ["ab\n", "cd"]);
        assert_eq!(wrapped.lines[0].width, 2);
        assert_eq!(wrapped.lines[1].start, 3);
        assert_eq!(wrapped.position, Position::new(0, 0));
    }

    #[test]
    fn test_exact_fill() {
        let wrapped = wrap("abc", 0, 3);
        assert_eq!(contents(&wrapped), ["abc"]);
        assert_eq!(wrapped.position, Position::new(0, 0));
    }

    #[test]
    fn test_exact_fill_caret_at_end_gets_fresh_row() {
        let wrapped = wrap("abc", 3, 3);
        assert_eq!(contents(&wrapped), ["abc", ""]);
        assert_eq!(wrapped.lines[1].start, 3);
        assert_eq!(wrapped.position, Position::new(1, 0));
    }

    #[test]
    fn test_trailing_explicit_break_adds_empty_line() {
        let wrapped = wrap("ab\n", 3, 10);
        assert_eq!(contents(&wrapped), ["ab\n", ""]);
        assert_eq!(wrapped.lines[1].start, 3);
        assert_eq!(wrapped.position, Position::new(1, 0));
    }

    #[test]
    fn test_explicit_break_after_full_line_is_suppressed() {
        let wrapped = wrap("abc\ndef", 0, 3);
        assert_eq!(contents(&wrapped), ["abc", "def"]);
        // The suppressed '\n' belongs to no line; "def" starts past it.
        assert_eq!(wrapped.lines[1].start, 4);
        assert_eq!(wrapped.reconstruct(), "abc\ndef");
    }

    #[test]
    fn test_caret_after_suppressed_break() {
        // Caret sits right after the suppressed '\n', i.e. before 'd'.
        let wrapped = wrap("abc\ndef", 4, 3);
        assert_eq!(contents(&wrapped), ["abc", "def"]);
        assert_eq!(wrapped.position, Position::new(1, 0));
    }

    #[test]
    fn test_only_one_break_is_suppressed() {
        // "ab" fills the line; the first '\n' is suppressed, the second is a
        // real blank line.
        let wrapped = wrap("ab\n\ncd", 0, 2);
        assert_eq!(contents(&wrapped), ["ab", "\n", "cd"]);
        assert_eq!(wrapped.lines[1].start, 3);
        assert_eq!(wrapped.lines[2].start, 4);
        assert_eq!(wrapped.reconstruct(), "ab\n\ncd");
    }

    #[test]
    fn test_suppressed_break_at_end_of_buffer() {
        let wrapped = wrap("abc\n", 0, 3);
        assert_eq!(contents(&wrapped), ["abc", ""]);
        assert_eq!(wrapped.lines[1].start, 4);
        assert_eq!(wrapped.reconstruct(), "abc\n");
    }

    #[test]
    fn test_wide_char_wraps_intact() {
        // "Hello" takes 5 cells; "你" needs 2 but only 1 remains.
        let wrapped = wrap("Hello你", 0, 6);
        assert_eq!(contents(&wrapped), ["Hello", "你"]);
        assert_eq!(wrapped.lines[0].width, 5);
        assert_eq!(wrapped.lines[1].width, 2);
    }

    #[test]
    fn test_wide_chars_fill_exactly() {
        let wrapped = wrap("你好世界", 0, 4);
        assert_eq!(contents(&wrapped), ["你好", "世界"]);
    }

    #[test]
    fn test_width_one_isolates_wide_glyphs() {
        // The glyph cannot be split, so it overflows a line of its own
        // instead of dragging the rest of the buffer with it.
        let wrapped = wrap("你a", 0, 1);
        assert_eq!(contents(&wrapped), ["你", "a"]);
        assert_eq!(wrapped.lines[0].width, 2);
        assert_eq!(wrapped.lines[1].start, 1);
    }

    #[test]
    fn test_wrap_str_delegates() {
        assert_eq!(wrap_str("hello", 5, 3), wrap("hello", 5, 3));
    }

    #[test]
    fn test_caret_mid_buffer() {
        let wrapped = wrap("hello world", 7, 4);
        assert_eq!(contents(&wrapped), ["hell", "o wo", "rld"]);
        assert_eq!(wrapped.position, Position::new(1, 3));
    }

    #[test]
    #[should_panic(expected = "caret 6 out of bounds")]
    fn test_caret_out_of_bounds_panics() {
        wrap("hello", 6, 10);
    }

    #[test]
    #[should_panic(expected = "target width")]
    fn test_zero_width_target_panics() {
        wrap("hello", 0, 0);
    }

    #[test]
    #[should_panic(expected = "tab at offset 1")]
    fn test_tab_panics() {
        wrap("a\tb", 0, 10);
    }

    #[test]
    #[should_panic(expected = "zero-width character")]
    fn test_zero_width_char_panics() {
        wrap("e\u{301}x", 0, 10);
    }
}
