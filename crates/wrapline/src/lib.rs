#![warn(missing_docs)]
//! Wrapline - Headless Line Wrapping Engine for Terminal Text
//!
//! # Overview
//!
//! `wrapline` is a headless wrapping kernel for console text, focused on
//! display-width-aware reflow, caret tracking, and bounded word wrapping.
//! It performs no I/O and renders nothing, assuming the upper layer provides
//! a "text grid" view renderer. Wide (CJK, fullwidth) characters are
//! handled per UAX #11.
//!
//! # Core Features
//!
//! - **Caret-Aware Reflow**: single-pass wrapping of an editable buffer to a
//!   fixed console width, mapping a linear caret offset to its row/column in
//!   the wrapped grid
//! - **Bounded Word Wrapping**: space-preferring wrapping of styled help
//!   text into a limited number of lines, ellipsized on overflow
//! - **Styled Text Model**: split/substring/concatenation that preserve
//!   per-range style metadata
//! - **Buffer Agnostic**: consumes plain strings or `ropey::Rope` chunked
//!   storage through one [`CharSource`] seam
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  wrap()            │  wrap_words()          │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  WrappedLine / Position │ StyledText        │  ← Output Model
//! ├─────────────────────────────────────────────┤
//! │  CharSource (str / String / Rope)           │  ← Buffer Access
//! ├─────────────────────────────────────────────┤
//! │  Display Width Oracle (UAX #11)             │  ← Measurement
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Wrapping an editable buffer around a caret
//!
//! ```rust
//! use wrapline::{Position, wrap};
//!
//! // Five characters, caret at the end, three columns available.
//! let wrapped = wrap("hello", 5, 3);
//!
//! let contents: Vec<&str> = wrapped.lines.iter().map(|l| l.content.as_str()).collect();
//! assert_eq!(contents, ["hel", "lo"]);
//! assert_eq!(wrapped.position, Position::new(1, 2));
//! ```
//!
//! ## Wrapping help text into a bounded box
//!
//! ```rust
//! use wrapline::{StyledText, wrap_words_bounded};
//!
//! let help = StyledText::plain("one two three four");
//! let lines = wrap_words_bounded(&help, 5, 2);
//!
//! let flat: Vec<String> = lines.iter().map(StyledText::text).collect();
//! assert_eq!(flat, ["one", "tw..."]);
//! ```
//!
//! # Module Description
//!
//! - [`width`] - display width measurement (UAX #11)
//! - [`buffer`] - the inbound text-buffer abstraction
//! - [`line`] - wrapped-line and caret-coordinate data model
//! - [`layout`] - caret-aware line wrapping
//! - [`styled`] - styled (formatted) text values
//! - [`words`] - bounded word wrapping
//!
//! # Unicode Support
//!
//! - UTF-8 throughout; offsets and columns are counted in `char`s
//! - CJK double-width characters never straddle a line boundary
//! - Zero-width characters are tolerated in the word-wrap path and rejected
//!   on the caret-aware path, where callers pre-filter input

pub mod buffer;
pub mod layout;
pub mod line;
mod pool;
pub mod styled;
pub mod width;
pub mod words;

pub use buffer::CharSource;
pub use layout::{LINE_BREAK, wrap, wrap_str};
pub use line::{Position, WrappedLine, WrappedText};
pub use styled::{DEFAULT_STYLE_ID, StyleId, StyledSpan, StyledText, StyledTextError};
pub use width::{char_width, str_width};
pub use words::{wrap_words, wrap_words_bounded};
