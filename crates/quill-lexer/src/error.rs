//! Error types.
//!
//! Two very different kinds of error live here:
//!
//! - [`ScanError`] is an internal failure raised by the [`Scanner`](crate::Scanner)
//!   (reading past the end, rewinding past the start). Handlers propagate it
//!   with `?` up to the lexer's recovery boundary, which turns it into a
//!   [`LexerErrorType::MalformedTag`] diagnostic. It never reaches the caller
//!   of [`Lexer::tokenize`](crate::Lexer::tokenize).
//! - [`LexerError`] is the user-facing diagnostic record. Diagnostics are
//!   collected, not thrown.

use std::str::Utf8Error;

use quill_common::Position;
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Failures raised by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The source handed to [`Lexer::from_bytes`](crate::Lexer::from_bytes)
    /// is not valid UTF-8.
    #[error("source is not valid UTF-8: {0}")]
    InvalidSource(#[from] Utf8Error),

    /// A read or peek went past the end of the input.
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEof {
        /// Byte offset of the failed read.
        position: usize,
    },

    /// A rewind would have moved the cursor before the start of the input.
    #[error("cannot rewind {requested} characters from byte {cursor}")]
    InvalidRewind {
        /// Number of characters the caller asked to step back.
        requested: usize,
        /// Cursor position when the rewind was attempted.
        cursor: usize,
    },

    /// A delimiter was required but something else was found.
    #[error("expected '{expected}' but found '{found}' at byte {position}")]
    UnexpectedCharacter {
        /// The delimiter the handler required.
        expected: char,
        /// What was actually there.
        found: char,
        /// Byte offset of `found`.
        position: usize,
    },
}

impl ScanError {
    /// True for errors that can only come from a handler misusing the scanner,
    /// as opposed to malformed input.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidRewind { .. })
    }
}

/// Every kind of diagnostic the lexer can record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LexerErrorType {
    /// A handler failed and the lexer skipped ahead to the next `<`.
    MalformedTag,
    /// Input ended while an element was still open.
    UnclosedTag,
    /// A closing tag arrived while no element was open.
    UnexpectedClosingTag,
    /// A stray character sat where an attribute name was expected.
    MalformedAttribute,
    /// `<!--` without a matching `-->`.
    UnclosedComment,
    /// `<![CDATA[` without a matching `]]>`.
    UnclosedCdata,
    /// `<?` without a matching `?>`.
    UnclosedProcessingInstruction,
    /// `&...;` text that is not in the named-entity table.
    InvalidCharacterReference,
    /// A closing tag whose name differs from the innermost open element.
    MismatchedTag,
}

/// A non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind} at {line}:{column}: {message}", line = .position.line, column = .position.column)]
pub struct LexerError {
    /// What went wrong.
    #[serde(rename = "type")]
    pub kind: LexerErrorType,
    /// Human-readable description.
    pub message: String,
    /// Where it went wrong.
    pub position: Position,
    /// A bounded slice of the source around the error site.
    pub context: String,
}
