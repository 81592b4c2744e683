//! Styled Text Values
//!
//! A [`StyledText`] pairs runs of characters with opaque style identifiers.
//! The wrapping engine treats styles purely as payload: splitting,
//! substring extraction, and concatenation preserve per-range styles, and
//! only display width is ever interpreted. What a style id means (color,
//! emphasis, a theme slot) is the consumer's business.

use crate::width::{char_width, str_width};
use std::fmt;
use thiserror::Error;

/// Style ID type
pub type StyleId = u32;

/// The style id carried by unstyled text, separator spaces re-inserted by
/// the word wrapper, and ellipsis dots.
pub const DEFAULT_STYLE_ID: StyleId = 0;

/// Errors produced when building styled text from raw spans.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyledTextError {
    /// A span with empty content was supplied; spans must hold at least one
    /// character.
    #[error("span {index} is empty")]
    EmptySpan {
        /// Index of the offending span in the supplied list.
        index: usize,
    },
}

/// A run of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// The run's text.
    pub content: String,
    /// The style applied to every character of the run.
    pub style: StyleId,
}

impl StyledSpan {
    /// Create a new span.
    pub fn new(content: impl Into<String>, style: StyleId) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width of the run.
    pub fn width(&self) -> usize {
        str_width(&self.content)
    }
}

/// An immutable sequence of styled runs, treated as a value.
///
/// Invariant: no span is empty, so a `StyledText` without spans is exactly
/// the empty text. Adjacent runs sharing a style are coalesced as text is
/// built, keeping the span list minimal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    spans: Vec<StyledSpan>,
}

impl StyledText {
    /// Create empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create styled text from a plain string, carrying [`DEFAULT_STYLE_ID`].
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            Self::new()
        } else {
            Self {
                spans: vec![StyledSpan::new(text, DEFAULT_STYLE_ID)],
            }
        }
    }

    /// Build styled text from raw spans, coalescing adjacent runs that share
    /// a style.
    ///
    /// Returns [`StyledTextError::EmptySpan`] if any span has no content.
    pub fn from_spans(spans: Vec<StyledSpan>) -> Result<Self, StyledTextError> {
        if let Some(index) = spans.iter().position(|span| span.content.is_empty()) {
            return Err(StyledTextError::EmptySpan { index });
        }
        let mut text = Self::new();
        for span in spans {
            text.push_span(span);
        }
        Ok(text)
    }

    /// The styled runs in order.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Whether the text holds no characters.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total display width.
    pub fn width(&self) -> usize {
        self.spans.iter().map(StyledSpan::width).sum()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.spans
            .iter()
            .map(|span| span.content.chars().count())
            .sum()
    }

    /// The text content with styles stripped.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|span| span.content.as_str())
            .collect()
    }

    /// Iterate characters in order, each paired with its style.
    pub fn chars(&self) -> impl Iterator<Item = (char, StyleId)> {
        self.spans
            .iter()
            .flat_map(|span| span.content.chars().map(move |ch| (ch, span.style)))
    }

    /// Append one character, coalescing into the last run when styles match.
    pub fn push_char(&mut self, ch: char, style: StyleId) {
        match self.spans.last_mut() {
            Some(span) if span.style == style => span.content.push(ch),
            _ => self.spans.push(StyledSpan::new(String::from(ch), style)),
        }
    }

    /// Append a run, coalescing with the last run when styles match.
    ///
    /// Empty runs are ignored.
    pub fn push_span(&mut self, span: StyledSpan) {
        if span.content.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == span.style => last.content.push_str(&span.content),
            _ => self.spans.push(span),
        }
    }

    /// Append another styled text, preserving its styles.
    pub fn append(&mut self, other: StyledText) {
        for span in other.spans {
            self.push_span(span);
        }
    }

    /// Concatenate two styled texts into a new value.
    pub fn concat(mut self, other: StyledText) -> StyledText {
        self.append(other);
        self
    }

    /// Split on every occurrence of `separator`, preserving styles.
    ///
    /// Mirrors `str::split`: `n` separators yield `n + 1` pieces, empty
    /// pieces included. The separator character itself (and its style) is
    /// dropped.
    pub fn split(&self, separator: char) -> Vec<StyledText> {
        let mut pieces = Vec::new();
        let mut current = StyledText::new();
        for (ch, style) in self.chars() {
            if ch == separator {
                pieces.push(std::mem::take(&mut current));
            } else {
                current.push_char(ch, style);
            }
        }
        pieces.push(current);
        pieces
    }

    /// Extract the substring covering the character range `start..end`,
    /// preserving styles.
    ///
    /// # Panics
    ///
    /// Panics when `start > end` or `end` exceeds the character count.
    pub fn slice_chars(&self, start: usize, end: usize) -> StyledText {
        assert!(start <= end, "slice range {start}..{end} is inverted");
        let count = self.char_count();
        assert!(end <= count, "slice end {end} out of bounds for {count} chars");
        let mut out = StyledText::new();
        for (ch, style) in self.chars().skip(start).take(end - start) {
            out.push_char(ch, style);
        }
        out
    }

    /// The longest prefix whose display width does not exceed `max_width`,
    /// preserving styles.
    pub fn truncate_to_width(&self, max_width: usize) -> StyledText {
        let mut out = StyledText::new();
        let mut used = 0usize;
        for (ch, style) in self.chars() {
            let w = char_width(ch);
            if used + w > max_width {
                break;
            }
            used += w;
            out.push_char(ch, style);
        }
        out
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPHASIS: StyleId = 7;

    #[test]
    fn test_plain_and_width() {
        let text = StyledText::plain("hi 你好");
        assert_eq!(text.width(), 7); // h, i, space, plus two wide glyphs
        assert_eq!(text.char_count(), 5);
        assert!(!text.is_empty());
        assert!(StyledText::plain("").is_empty());
    }

    #[test]
    fn test_from_spans_rejects_empty_span() {
        let err = StyledText::from_spans(vec![
            StyledSpan::new("ok", DEFAULT_STYLE_ID),
            StyledSpan::new("", EMPHASIS),
        ])
        .unwrap_err();
        assert_eq!(err, StyledTextError::EmptySpan { index: 1 });
    }

    #[test]
    fn test_from_spans_coalesces_same_style() {
        let text = StyledText::from_spans(vec![
            StyledSpan::new("ab", EMPHASIS),
            StyledSpan::new("cd", EMPHASIS),
            StyledSpan::new("ef", DEFAULT_STYLE_ID),
        ])
        .unwrap();
        assert_eq!(text.spans().len(), 2);
        assert_eq!(text.text(), "abcdef");
    }

    #[test]
    fn test_split_preserves_styles() {
        let text = StyledText::from_spans(vec![
            StyledSpan::new("red ", EMPHASIS),
            StyledSpan::new("blue", DEFAULT_STYLE_ID),
        ])
        .unwrap();
        let pieces = text.split(' ');
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].text(), "red");
        assert_eq!(pieces[0].spans()[0].style, EMPHASIS);
        assert_eq!(pieces[1].text(), "blue");
        assert_eq!(pieces[1].spans()[0].style, DEFAULT_STYLE_ID);
    }

    #[test]
    fn test_split_keeps_empty_pieces() {
        let text = StyledText::plain("a  b");
        let pieces = text.split(' ');
        let flat: Vec<String> = pieces.iter().map(StyledText::text).collect();
        assert_eq!(flat, ["a", "", "b"]);

        // A lone separator yields two empty pieces.
        let pieces = StyledText::plain("\n").split('\n');
        assert_eq!(pieces.len(), 2);
        assert!(pieces[0].is_empty() && pieces[1].is_empty());
    }

    #[test]
    fn test_slice_chars() {
        let text = StyledText::from_spans(vec![
            StyledSpan::new("abc", EMPHASIS),
            StyledSpan::new("def", DEFAULT_STYLE_ID),
        ])
        .unwrap();
        let middle = text.slice_chars(2, 4);
        assert_eq!(middle.text(), "cd");
        assert_eq!(middle.spans().len(), 2);
        assert_eq!(middle.spans()[0].style, EMPHASIS);
        assert_eq!(middle.spans()[1].style, DEFAULT_STYLE_ID);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_slice_chars_out_of_bounds_panics() {
        StyledText::plain("ab").slice_chars(0, 3);
    }

    #[test]
    fn test_truncate_to_width_respects_wide_glyphs() {
        let text = StyledText::plain("a你b");
        // 'a' fits; '你' would need 2 more cells but only 1 remains.
        let truncated = text.truncate_to_width(2);
        assert_eq!(truncated.text(), "a");
        assert_eq!(text.truncate_to_width(3).text(), "a你");
    }

    #[test]
    fn test_concat_coalesces_boundary() {
        let left = StyledText::plain("ab");
        let right = StyledText::plain("cd");
        let joined = left.concat(right);
        assert_eq!(joined.spans().len(), 1);
        assert_eq!(joined.text(), "abcd");
    }
}
