//! Raw content modes.
//!
//! In these modes markup is not recognised: everything up to the mode's
//! terminator becomes a single content token. At the end of input the
//! partial content is still emitted, followed by an "unclosed" diagnostic.

use crate::error::{LexerErrorType, ScanError};
use crate::token::TokenType;

use super::machine::{ContentMode, Run};

impl Run<'_> {
    /// Script or style content up to the matching end tag.
    ///
    /// The end tag itself is left in the input so the normal closing-tag
    /// handler pops it off the tag stack.
    pub(super) fn lex_raw_text(&mut self) -> Result<(), ScanError> {
        let mode = self.state.mode;
        let Some(tag) = mode.raw_text_tag() else {
            self.state.mode = ContentMode::Normal;
            return Ok(());
        };
        let kind = if mode == ContentMode::Script {
            TokenType::ScriptContent
        } else {
            TokenType::StyleContent
        };

        loop {
            let _ = self.scanner.take_while(|c| c != '<');
            if !self.scanner.has_next() {
                let token = self.token(kind, self.current_text());
                self.emit(token);
                self.close_unterminated_raw_text(tag);
                break;
            }
            if self.at_end_tag(tag) {
                let token = self.token(kind, self.current_text());
                self.emit(token);
                break;
            }
            let _ = self.scanner.next()?;
        }

        self.state.mode = ContentMode::Normal;
        Ok(())
    }

    /// Whether the input at the cursor is `</tag>`, case-insensitively and
    /// allowing whitespace before the `>`. Never moves the cursor.
    fn at_end_tag(&mut self, tag: &str) -> bool {
        self.scanner.mark();
        let matched = self.scanner.consume_str("</") && {
            let name = self.scanner.take_while(|c| c.is_ascii_alphanumeric());
            let _ = self.scanner.take_while(char::is_whitespace);
            name.eq_ignore_ascii_case(tag) && self.scanner.peek() == Ok('>')
        };
        self.scanner.reset();
        matched
    }

    /// Report a script or style element cut off by the end of input, once.
    ///
    /// The element comes off the tag stack here so the end-of-input sweep
    /// does not report it a second time.
    fn close_unterminated_raw_text(&mut self, tag: &str) {
        let open = self
            .state
            .tag_stack
            .iter()
            .rposition(|open| open.name.eq_ignore_ascii_case(tag))
            .map(|index| self.state.tag_stack.remove(index));
        let (start, end) = open.map_or((self.state.mode_start, self.scanner.cursor()), |open| {
            (open.start, open.end)
        });
        self.diagnostics.record_wide(
            LexerErrorType::UnclosedTag,
            format!("unclosed <{tag}> element"),
            start,
            end,
        );
    }

    /// CDATA content up to `]]>`.
    pub(super) fn lex_cdata(&mut self) {
        self.lex_delimited(
            TokenType::CdataContent,
            "]]>",
            LexerErrorType::UnclosedCdata,
            "CDATA section is never closed",
        );
    }

    /// Processing instruction content up to `?>`, leading whitespace
    /// included.
    pub(super) fn lex_processing_instruction(&mut self) {
        self.lex_delimited(
            TokenType::PiContent,
            "?>",
            LexerErrorType::UnclosedProcessingInstruction,
            "processing instruction is never closed",
        );
    }

    fn lex_delimited(
        &mut self,
        kind: TokenType,
        terminator: &str,
        unclosed: LexerErrorType,
        message: &str,
    ) {
        let content = self.scanner.take_until(terminator);
        let token = self.token(kind, content);
        self.emit(token);

        if !self.scanner.consume_str(terminator) {
            let (start, end) = (self.state.mode_start, self.scanner.cursor());
            self.diagnostics.record_wide(unclosed, message, start, end);
        }
        self.state.mode = ContentMode::Normal;
    }
}
