//! Markup declarations (`<!...`) and the start of processing instructions.

use crate::error::{LexerErrorType, ScanError};
use crate::token::TokenType;

use super::helpers::is_whitespace;
use super::machine::{ContentMode, Run};

impl Run<'_> {
    /// `<!--`, `<![CDATA[`, `<!DOCTYPE` or an unrecognised declaration.
    /// The `<` has been consumed and the next character is `!`.
    pub(super) fn lex_markup_declaration(&mut self) -> Result<(), ScanError> {
        let _ = self.scanner.next()?;
        if self.scanner.consume_str("--") {
            self.lex_comment();
        } else if self.scanner.consume_str("[CDATA[") {
            self.state.mode = ContentMode::Cdata;
            self.state.mode_start = self.start;
        } else if matches!(self.scanner.peek(), Ok('D' | 'd')) {
            self.lex_doctype();
        } else {
            let _ = self.scanner.take_until(">");
            let _ = self.scanner.match_char('>');
            self.report(
                LexerErrorType::MalformedTag,
                "unrecognised markup declaration",
            );
        }
        Ok(())
    }

    /// Comment body up to `-->`. The body is emitted even when the comment
    /// never closes.
    fn lex_comment(&mut self) {
        let content_start = self.scanner.cursor();
        let content = self.scanner.take_until("-->");
        let content_end = self.scanner.cursor();
        let closed = self.scanner.consume_str("-->");

        let token = self.token_at(
            TokenType::CommentContent,
            content,
            content_start,
            content_end,
        );
        self.emit(token);
        if !closed {
            self.report(LexerErrorType::UnclosedComment, "comment is never closed");
        }
    }

    /// `<!DOCTYPE ...>`, kept verbatim including the delimiters.
    fn lex_doctype(&mut self) {
        let _ = self.scanner.take_until(">");
        let closed = self.scanner.match_char('>');

        let token = self.token(TokenType::Doctype, self.current_text());
        self.emit(token);
        if !closed {
            self.report(LexerErrorType::MalformedTag, "doctype is missing '>'");
        }
    }

    /// `<?target`. The content that follows is read in
    /// [`ContentMode::ProcessingInstruction`].
    pub(super) fn lex_processing_instruction_start(&mut self) -> Result<(), ScanError> {
        let _ = self.scanner.next()?;
        let target = self
            .scanner
            .take_while(|c| !is_whitespace(c) && c != '?');

        let token = self.token(TokenType::PiTarget, target);
        self.emit(token);
        self.state.mode = ContentMode::ProcessingInstruction;
        self.state.mode_start = self.start;
        Ok(())
    }
}
