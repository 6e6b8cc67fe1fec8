//! Character-level cursor over the source buffer.
//!
//! The scanner owns nothing but a borrowed `&str`, a byte cursor and a stack
//! of saved cursors. All speculative lookahead in the lexer is written as
//! "mark, attempt, reset on failure": the buffer is never copied.
//!
//! The cursor is a byte offset that always sits on a character boundary;
//! every read advances by the UTF-8 width of the character read.

use crate::error::ScanError;

/// A cursor over the source with a backtracking checkpoint stack.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    cursor: usize,
    markers: Vec<usize>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: 0,
            markers: Vec::new(),
        }
    }

    /// True iff there is at least one more character to read.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Read the character at the cursor and advance past it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnexpectedEof`] at the end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<char, ScanError> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Ok(c)
    }

    /// The character at the cursor, without advancing.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnexpectedEof`] at the end of input.
    pub fn peek(&self) -> Result<char, ScanError> {
        self.peek_next(0)
    }

    /// The character `offset` characters past the cursor, without advancing.
    /// `peek_next(0)` is the same as [`peek`](Self::peek).
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnexpectedEof`] if that character does not exist.
    pub fn peek_next(&self, offset: usize) -> Result<char, ScanError> {
        self.remaining()
            .chars()
            .nth(offset)
            .ok_or(ScanError::UnexpectedEof {
                position: self.cursor,
            })
    }

    /// Move the cursor back by `n` characters.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidRewind`] (leaving the cursor untouched) if
    /// that would move before the start of the input.
    pub fn rewind(&mut self, n: usize) -> Result<(), ScanError> {
        let mut pos = self.cursor;
        for _ in 0..n {
            let Some(c) = self.source[..pos].chars().next_back() else {
                return Err(ScanError::InvalidRewind {
                    requested: n,
                    cursor: self.cursor,
                });
            };
            pos -= c.len_utf8();
        }
        self.cursor = pos;
        Ok(())
    }

    /// Consume the character at the cursor iff it equals `expected`.
    ///
    /// Never consumes anything on a mismatch.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Ok(expected) {
            self.cursor += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `prefix` iff the remaining input starts with it.
    pub fn consume_str(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.cursor += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds and return them as a slice of
    /// the source. Stops quietly at the end of input.
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.cursor;
        let len = self
            .remaining()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.source.len() - start, |(i, _)| i);
        self.cursor += len;
        &self.source[start..self.cursor]
    }

    /// Consume everything up to, but not including, the next occurrence of
    /// `delimiter` and return it. Runs to the end of input if `delimiter`
    /// never occurs.
    pub fn take_until(&mut self, delimiter: &str) -> &'a str {
        let start = self.cursor;
        let len = self
            .remaining()
            .find(delimiter)
            .unwrap_or(self.source.len() - start);
        self.cursor += len;
        &self.source[start..self.cursor]
    }

    /// True if the remaining input starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Save the cursor so a speculative read can be undone with
    /// [`reset`](Self::reset).
    pub fn mark(&mut self) {
        self.markers.push(self.cursor);
    }

    /// Restore the cursor saved by the most recent unpopped [`mark`](Self::mark).
    /// Does nothing if no marker is saved.
    pub fn reset(&mut self) {
        if let Some(marker) = self.markers.pop() {
            self.cursor = marker;
        }
    }

    /// Drop the most recent marker without moving the cursor, keeping what
    /// the speculative read consumed.
    pub fn commit(&mut self) {
        let _ = self.markers.pop();
    }

    /// Abandon every saved marker.
    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    /// Number of markers currently saved.
    #[must_use]
    pub const fn marker_depth(&self) -> usize {
        self.markers.len()
    }

    /// Current byte offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the source in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.source.len()
    }

    /// True for an empty source.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Everything from the cursor to the end of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    /// The source between byte offsets `start` and `end`.
    ///
    /// Out-of-range offsets are clamped and offsets inside a multi-byte
    /// character are widened to the enclosing character, so this never
    /// panics.
    #[must_use]
    pub fn source_segment(&self, start: usize, end: usize) -> &'a str {
        segment(self.source, start, end)
    }
}

/// Clamp `start..end` into `source`, widening to character boundaries.
pub(crate) fn segment(source: &str, start: usize, end: usize) -> &str {
    let len = source.len();
    let mut start = start.min(len);
    let mut end = end.clamp(start, len);
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    while !source.is_char_boundary(end) {
        end += 1;
    }
    &source[start..end]
}
