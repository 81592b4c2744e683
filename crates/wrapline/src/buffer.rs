//! Inbound Text Buffer Abstraction
//!
//! The caret-aware wrapper consumes any linear character sequence through
//! [`CharSource`]: a total character count plus ordered iteration from the
//! start. Implementations are provided for plain strings and for
//! [`ropey::Rope`], so rope-backed editors can wrap directly from their
//! chunked storage without materializing an intermediate `String`.

use ropey::Rope;

/// A read-only, linearly addressable character sequence.
///
/// Callers guarantee that the sequence contains no tab characters (tab
/// expansion happens upstream) and, on the caret-aware wrapping path, no
/// zero-width characters.
pub trait CharSource {
    /// Total character count of the sequence.
    fn len_chars(&self) -> usize;

    /// Iterate the characters in order from the start of the sequence.
    fn chars(&self) -> impl Iterator<Item = char>;
}

impl CharSource for str {
    fn len_chars(&self) -> usize {
        str::chars(self).count()
    }

    fn chars(&self) -> impl Iterator<Item = char> {
        str::chars(self)
    }
}

impl CharSource for String {
    fn len_chars(&self) -> usize {
        str::chars(self).count()
    }

    fn chars(&self) -> impl Iterator<Item = char> {
        str::chars(self)
    }
}

impl CharSource for Rope {
    fn len_chars(&self) -> usize {
        Rope::len_chars(self)
    }

    fn chars(&self) -> impl Iterator<Item = char> {
        Rope::chars(self)
    }
}
