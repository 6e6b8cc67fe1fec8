//! Opening tags, closing tags and their attributes.

use crate::error::{LexerErrorType, ScanError};
use crate::tables;
use crate::token::{Attribute, TokenMetadata, TokenType};

use super::helpers::is_whitespace;
use super::machine::{ContentMode, OpenElement, Run};

/// Characters that can appear in an attribute name.
const fn is_attribute_name_char(c: char) -> bool {
    !is_whitespace(c) && !matches!(c, '=' | '>' | '/' | '"' | '\'')
}

// =============================================================================
// Opening Tags
// =============================================================================

impl<'a> Run<'a> {
    /// `<name attr=value ...>` or `<name .../>`. The `<` has been consumed
    /// and the next character is known to be an ASCII letter.
    pub(super) fn lex_opening_tag(&mut self) -> Result<(), ScanError> {
        let name = self
            .scanner
            .take_while(|c| !is_whitespace(c) && c != '>' && c != '/');
        let attributes = self.read_attributes()?;
        let self_closing = self.scanner.match_char('/');
        self.expect('>')?;

        let is_void = tables::is_void_element(name);
        if !self_closing {
            if let Some(mode) = ContentMode::for_raw_text_element(name) {
                self.state.mode = mode;
                self.state.mode_start = self.start;
            }
            if !is_void {
                self.state.tag_stack.push(OpenElement {
                    name: name.to_string(),
                    start: self.start,
                    end: self.scanner.cursor(),
                });
            }
        }

        let metadata = TokenMetadata {
            is_void,
            is_custom_element: name.contains('-'),
            namespace: name
                .split_once(':')
                .map(|(prefix, _)| prefix.to_string()),
            raw: self.current_text().to_string(),
        };
        let kind = if self_closing {
            TokenType::SelfClosingTag
        } else {
            TokenType::OpeningTag
        };
        let token = self
            .token(kind, name)
            .with_attributes(attributes)
            .with_metadata(metadata);
        self.emit(token);
        Ok(())
    }

    /// Attributes up to (not including) `>` or `/>`.
    fn read_attributes(&mut self) -> Result<Vec<Attribute>, ScanError> {
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.scanner.peek()? {
                '>' => break,
                '/' if self.scanner.peek_next(1) == Ok('>') => break,
                // stray solidus between attributes
                '/' => {
                    let _ = self.scanner.next()?;
                    continue;
                }
                _ => {}
            }

            let name = self.scanner.take_while(is_attribute_name_char);
            if name.is_empty() {
                let at = self.scanner.cursor();
                let stray = self.scanner.next()?;
                self.diagnostics.record(
                    LexerErrorType::MalformedAttribute,
                    format!("unexpected '{stray}' where an attribute name was expected"),
                    at,
                    self.scanner.cursor(),
                );
                continue;
            }

            self.skip_whitespace();
            let value = if self.scanner.match_char('=') {
                self.skip_whitespace();
                self.read_attribute_value()?
            } else {
                ""
            };
            attributes.push(Attribute::new(name, value));
        }
        Ok(attributes)
    }

    /// A quoted or unquoted value. The `=` has been consumed.
    fn read_attribute_value(&mut self) -> Result<&'a str, ScanError> {
        match self.scanner.peek()? {
            quote @ ('"' | '\'') => {
                let _ = self.scanner.next()?;
                let value = self.scanner.take_while(|c| c != quote);
                self.expect(quote)?;
                Ok(value)
            }
            _ => Ok(self
                .scanner
                .take_while(|c| !is_whitespace(c) && c != '>')),
        }
    }
}

// =============================================================================
// Closing Tags
// =============================================================================

impl Run<'_> {
    /// `</name>`. The `<` has been consumed and the next character is `/`.
    pub(super) fn lex_closing_tag(&mut self) -> Result<(), ScanError> {
        let _ = self.scanner.next()?;
        let name = self.scanner.take_while(|c| c != '>' && c != '<').trim();
        self.expect('>')?;

        if name.is_empty() {
            self.report(LexerErrorType::MalformedTag, "closing tag has no name");
            return Ok(());
        }

        match self.state.tag_stack.pop() {
            Some(open) if open.name.eq_ignore_ascii_case(name) => {}
            Some(open) => self.report(
                LexerErrorType::MismatchedTag,
                format!("expected </{}>, found </{name}>", open.name),
            ),
            None => self.report(
                LexerErrorType::UnexpectedClosingTag,
                format!("</{name}> closes nothing: no element is open"),
            ),
        }

        let metadata = TokenMetadata {
            raw: self.current_text().to_string(),
            ..TokenMetadata::default()
        };
        let token = self
            .token(TokenType::ClosingTag, name)
            .with_metadata(metadata);
        self.emit(token);
        Ok(())
    }
}
