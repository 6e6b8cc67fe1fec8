//! Named entity references.

use crate::error::LexerErrorType;
use crate::tables;
use crate::token::TokenType;

use super::helpers::is_whitespace;
use super::machine::Run;

impl Run<'_> {
    /// `&name;`. The `&` has been consumed.
    ///
    /// Known entities become a single [`TokenType::Entity`] token holding the
    /// raw text. Anything else is reported and re-read as plain text starting
    /// at the `&`, so no input is lost. The name is read no further than the
    /// longest known reference.
    pub(super) fn lex_entity(&mut self) {
        self.scanner.mark();
        // `&` and `;` are not part of the name
        let mut remaining = tables::MAX_ENTITY_LEN - 2;
        let _ = self.scanner.take_while(|c| {
            let more = remaining > 0 && !is_whitespace(c) && c != '<' && c != ';' && c != '&';
            remaining = remaining.saturating_sub(1);
            more
        });
        let terminated = self.scanner.match_char(';');
        let raw = self.current_text();

        if terminated && tables::is_known_entity(raw) {
            self.scanner.commit();
            let token = self.token(TokenType::Entity, raw);
            self.emit(token);
            return;
        }

        self.scanner.reset();
        let end = self.start + raw.len();
        self.diagnostics.record(
            LexerErrorType::InvalidCharacterReference,
            format!("invalid character reference: {raw}"),
            self.start,
            end,
        );
        self.lex_text();
    }
}
