//! Helper functions shared by the lexer handlers.
//!
//! - Token construction and emission
//! - Diagnostics anchored at the current step
//! - Small readers: whitespace skipping, `expect`, plain text

use crate::error::{LexerErrorType, ScanError};
use crate::token::{Token, TokenType};

use super::machine::Run;

/// Whitespace that separates attributes and is skipped between constructs.
pub(super) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

// =============================================================================
// Token Emission
// =============================================================================

impl<'a> Run<'a> {
    /// The source consumed by the current step so far.
    pub(super) fn current_text(&self) -> &'a str {
        self.scanner.source_segment(self.start, self.scanner.cursor())
    }

    /// A token spanning from the start of the current step to the cursor.
    pub(super) fn token(&self, kind: TokenType, value: impl Into<String>) -> Token {
        Token::new(
            kind,
            value,
            self.diagnostics.position(self.start, self.scanner.cursor()),
        )
    }

    /// A token spanning `start..end`.
    pub(super) fn token_at(
        &self,
        kind: TokenType,
        value: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Token {
        Token::new(kind, value, self.diagnostics.position(start, end))
    }

    pub(super) fn emit(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

impl Run<'_> {
    /// Record a diagnostic spanning the current step.
    pub(super) fn report(&mut self, kind: LexerErrorType, message: impl Into<String>) {
        let end = self.scanner.cursor();
        self.diagnostics.record(kind, message, self.start, end);
    }
}

// =============================================================================
// Readers
// =============================================================================

impl Run<'_> {
    pub(super) fn skip_whitespace(&mut self) {
        let _ = self.scanner.take_while(is_whitespace);
    }

    /// Consume `expected` or fail. On a mismatch nothing is consumed, so
    /// recovery resumes at the offending character.
    pub(super) fn expect(&mut self, expected: char) -> Result<(), ScanError> {
        let position = self.scanner.cursor();
        let found = self.scanner.peek()?;
        if found == expected {
            let _ = self.scanner.next()?;
            Ok(())
        } else {
            Err(ScanError::UnexpectedCharacter {
                expected,
                found,
                position,
            })
        }
    }

    /// Plain text from the start of the step up to the next `<` or `&`.
    ///
    /// Runs that are entirely whitespace produce no token.
    pub(super) fn lex_text(&mut self) {
        let _ = self.scanner.take_while(|c| c != '<' && c != '&');
        let text = self.current_text();
        if !text.trim().is_empty() {
            let token = self.token(TokenType::Text, text);
            self.emit(token);
        }
    }
}
