//! Bounded Word Wrapping
//!
//! Wraps formatted, read-only text (help strings, prompts) into lines of
//! bounded display width, preferring breaks at spaces and hard-splitting
//! words wider than an entire line. An optional line budget truncates the
//! output with an ellipsis when more lines would be needed than allowed.

use crate::layout::LINE_BREAK;
use crate::styled::{DEFAULT_STYLE_ID, StyledText};
use crate::width::char_width;
use tracing::trace;

/// Wrap styled text into lines of at most `max_length` display width,
/// breaking at spaces where possible.
///
/// Explicit `'\n'` characters split the input into segments that wrap
/// independently; an empty segment yields an empty output line, so blank
/// lines survive. A word wider than `max_length` is hard-split into chunks
/// of at most `max_length` width, preserving each character's style.
/// Zero-width characters ride along without consuming columns and never
/// trigger a break on their own.
///
/// Empty input or `max_length == 0` yields no lines.
pub fn wrap_words(input: &StyledText, max_length: usize) -> Vec<StyledText> {
    wrap_words_impl(input, max_length, None)
}

/// Wrap styled text as [`wrap_words`], limited to at most `max_lines` lines.
///
/// When the unconstrained wrap would need more lines, the output holds
/// exactly `max_lines` lines and wrapping stops immediately: the last line
/// is truncated to leave room for an ellipsis of up to three dots within
/// `max_length`, or replaced entirely by `max_length` dots when
/// `max_length <= 3`. `max_lines == 0` yields no lines.
///
/// # Examples
///
/// ```rust
/// use wrapline::{StyledText, wrap_words_bounded};
///
/// let help = StyledText::plain("one two three four");
/// let lines = wrap_words_bounded(&help, 5, 2);
/// let flat: Vec<String> = lines.iter().map(StyledText::text).collect();
/// assert_eq!(flat, ["one", "tw..."]);
/// ```
pub fn wrap_words_bounded(
    input: &StyledText,
    max_length: usize,
    max_lines: usize,
) -> Vec<StyledText> {
    wrap_words_impl(input, max_length, Some(max_lines))
}

fn wrap_words_impl(
    input: &StyledText,
    max_length: usize,
    max_lines: Option<usize>,
) -> Vec<StyledText> {
    if input.is_empty() || max_length == 0 || max_lines == Some(0) {
        return Vec::new();
    }

    trace!(
        chars = input.char_count(),
        max_length,
        max_lines,
        "word-wrapping styled text"
    );

    let mut lines: Vec<StyledText> = Vec::new();
    for segment in input.split(LINE_BREAK) {
        let mut current = StyledText::new();
        let mut current_width = 0usize;

        for word in segment.split(' ') {
            let word_width = word.width();
            if word_width <= max_length {
                if !place_word(
                    &mut lines,
                    &mut current,
                    &mut current_width,
                    word,
                    word_width,
                    max_length,
                    max_lines,
                ) {
                    return lines;
                }
            } else {
                // Wider than an entire line: hard-split into chunks that
                // each fit, then place every chunk as its own word.
                for chunk in hard_split(&word, max_length) {
                    let chunk_width = chunk.width();
                    if !place_word(
                        &mut lines,
                        &mut current,
                        &mut current_width,
                        chunk,
                        chunk_width,
                        max_length,
                        max_lines,
                    ) {
                        return lines;
                    }
                }
            }
        }

        // Segment done; flush even an empty accumulator so blank input
        // lines stay visible.
        if !push_line(&mut lines, std::mem::take(&mut current), max_length, max_lines) {
            return lines;
        }
    }

    lines
}

/// Place one candidate word, flushing the current line first when the word
/// (plus a separating space on a non-empty line) would not fit. Returns
/// `false` when the line budget ran out and wrapping must stop.
fn place_word(
    lines: &mut Vec<StyledText>,
    current: &mut StyledText,
    current_width: &mut usize,
    word: StyledText,
    word_width: usize,
    max_length: usize,
    max_lines: Option<usize>,
) -> bool {
    let space = usize::from(!current.is_empty());
    let overflow = *current_width > max_length || *current_width + space + word_width > max_length;
    // An empty accumulator has nothing to flush; an indivisible glyph wider
    // than the whole line simply lands on a line of its own.
    if overflow && !current.is_empty() {
        if !push_line(lines, std::mem::take(current), max_length, max_lines) {
            return false;
        }
        *current_width = 0;
    }
    if !current.is_empty() {
        current.push_char(' ', DEFAULT_STYLE_ID);
        *current_width += 1;
    }
    *current_width += word_width;
    current.append(word);
    true
}

/// Append a completed line, enforcing the line budget.
///
/// When the output already holds `max_lines` lines, the new line is
/// discarded, the last already-added line is replaced by its ellipsized
/// form, and `false` is returned to terminate the wrap.
fn push_line(
    lines: &mut Vec<StyledText>,
    line: StyledText,
    max_length: usize,
    max_lines: Option<usize>,
) -> bool {
    if let Some(budget) = max_lines
        && lines.len() == budget
    {
        if let Some(last) = lines.last_mut() {
            *last = ellipsize(last, max_length);
        }
        return false;
    }
    lines.push(line);
    true
}

/// Greedily cut a word into consecutive chunks of at most `max_length`
/// display width, preserving per-character styles.
///
/// A glyph wider than `max_length` itself cannot be split and becomes an
/// over-width chunk of its own.
fn hard_split(word: &StyledText, max_length: usize) -> Vec<StyledText> {
    let mut chunks = Vec::new();
    let mut chunk = StyledText::new();
    let mut chunk_width = 0usize;
    for (ch, style) in word.chars() {
        let w = char_width(ch);
        if chunk_width + w > max_length && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push_char(ch, style);
        chunk_width += w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Truncate a line to leave room for an ellipsis within `max_length`.
///
/// With `max_length > 3`, the line keeps at most `max_length - 3` cells of
/// content and gains up to three dots sized to the remaining budget; with
/// `max_length <= 3`, the whole line is replaced by `max_length` dots.
fn ellipsize(line: &StyledText, max_length: usize) -> StyledText {
    if max_length > 3 {
        let mut out = line.truncate_to_width(max_length - 3);
        let dots = (max_length - out.width()).min(3);
        for _ in 0..dots {
            out.push_char('.', DEFAULT_STYLE_ID);
        }
        out
    } else {
        let mut out = StyledText::new();
        for _ in 0..max_length {
            out.push_char('.', DEFAULT_STYLE_ID);
        }
        out
    }
}
