//! Diagnostic collection.
//!
//! Every problem the lexer notices is appended here together with its
//! position and a slice of the surrounding source. Nothing in this module
//! can fail, and nothing here feeds back into the token stream.

use quill_common::{LineIndex, Position};
use strum::IntoEnumIterator;

use crate::error::{LexerError, LexerErrorType};
use crate::scanner::segment;

/// Bytes of context captured on each side of a diagnostic by default.
pub const DEFAULT_CONTEXT_RADIUS: usize = 10;

/// Accumulates [`LexerError`]s for one tokenize run.
#[derive(Debug, Clone)]
pub struct Diagnostics<'a> {
    source: &'a str,
    index: LineIndex<'a>,
    context_radius: usize,
    errors: Vec<LexerError>,
}

impl<'a> Diagnostics<'a> {
    /// An empty collector for `source`.
    #[must_use]
    pub fn new(source: &'a str, context_radius: usize) -> Self {
        Self {
            source,
            index: LineIndex::new(source),
            context_radius,
            errors: Vec::new(),
        }
    }

    /// Resolve a byte range to a [`Position`]. Shared with the lexer so
    /// tokens and diagnostics agree on line numbers.
    #[must_use]
    pub fn position(&self, start: usize, end: usize) -> Position {
        self.index.position(start, end)
    }

    /// The source within `radius` bytes either side of `offset`.
    #[must_use]
    pub fn context_around(&self, offset: usize, radius: usize) -> &'a str {
        segment(
            self.source,
            offset.saturating_sub(radius),
            offset.saturating_add(radius),
        )
    }

    /// Record a diagnostic covering `start..end` with the default context.
    pub fn record(
        &mut self,
        kind: LexerErrorType,
        message: impl Into<String>,
        start: usize,
        end: usize,
    ) {
        self.push(kind, message.into(), start, end, self.context_radius);
    }

    /// Record a diagnostic with twice the usual context. Used for unclosed
    /// elements and recovery, where the reader needs more to go on.
    pub fn record_wide(
        &mut self,
        kind: LexerErrorType,
        message: impl Into<String>,
        start: usize,
        end: usize,
    ) {
        self.push(
            kind,
            message.into(),
            start,
            end,
            self.context_radius.saturating_mul(2),
        );
    }

    fn push(&mut self, kind: LexerErrorType, message: String, start: usize, end: usize, radius: usize) {
        let error = LexerError {
            kind,
            message,
            position: self.position(start, end),
            context: self.context_around(start, radius).to_string(),
        };
        self.errors.push(error);
    }

    /// Number of diagnostics recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The diagnostics recorded so far, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[LexerError] {
        &self.errors
    }

    /// Hand the diagnostics to the caller.
    #[must_use]
    pub fn into_errors(self) -> Vec<LexerError> {
        self.errors
    }
}

/// Count diagnostics per kind, in declaration order, skipping kinds that
/// did not occur.
#[must_use]
pub fn summarize(errors: &[LexerError]) -> Vec<(LexerErrorType, usize)> {
    LexerErrorType::iter()
        .map(|kind| (kind, errors.iter().filter(|e| e.kind == kind).count()))
        .filter(|&(_, count)| count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_centered_and_clamped() {
        let diagnostics = Diagnostics::new("0123456789abcdef", 4);
        assert_eq!(diagnostics.context_around(8, 4), "456789ab");
        assert_eq!(diagnostics.context_around(1, 4), "01234");
        assert_eq!(diagnostics.context_around(15, 4), "bcdef");
    }

    #[test]
    fn test_record_resolves_line_and_column() {
        let mut diagnostics = Diagnostics::new("<a>\n  </b>", DEFAULT_CONTEXT_RADIUS);
        diagnostics.record(LexerErrorType::MismatchedTag, "mismatch", 6, 10);
        let error = &diagnostics.as_slice()[0];
        assert_eq!(error.position.line, 2);
        assert_eq!(error.position.column, 3);
        assert_eq!(error.position.start, 6);
        assert_eq!(error.position.end, 10);
    }

    #[test]
    fn test_wide_context_doubles_radius() {
        let mut diagnostics = Diagnostics::new("abcdefghijklmnopqrstuvwxyz", 2);
        diagnostics.record_wide(LexerErrorType::UnclosedTag, "unclosed", 10, 11);
        assert_eq!(diagnostics.as_slice()[0].context, "ghijklmn");
    }

    #[test]
    fn test_summarize_counts_in_declaration_order() {
        let mut diagnostics = Diagnostics::new("x", 1);
        diagnostics.record(LexerErrorType::MismatchedTag, "a", 0, 1);
        diagnostics.record(LexerErrorType::UnclosedTag, "b", 0, 1);
        diagnostics.record(LexerErrorType::MismatchedTag, "c", 0, 1);
        let summary = summarize(diagnostics.as_slice());
        assert_eq!(
            summary,
            vec![
                (LexerErrorType::UnclosedTag, 1),
                (LexerErrorType::MismatchedTag, 2),
            ]
        );
    }
}
