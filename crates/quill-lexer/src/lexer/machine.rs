use quill_common::warning::warn_once;
use serde::Serialize;
use strum_macros::Display;

use crate::diagnostics::{DEFAULT_CONTEXT_RADIUS, Diagnostics};
use crate::error::{LexerError, LexerErrorType, ScanError};
use crate::scanner::Scanner;
use crate::token::{Token, TokenType};

/// Which construct currently owns the input.
///
/// Only one raw-content construct can be open at a time, so this is a single
/// enum rather than a set of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum ContentMode {
    /// Dispatch on each character.
    #[default]
    Normal,
    /// Inside `<script>`, looking for `</script>`.
    Script,
    /// Inside `<style>`, looking for `</style>`.
    Style,
    /// Inside `<![CDATA[`, looking for `]]>`.
    Cdata,
    /// After `<?target`, looking for `?>`.
    ProcessingInstruction,
}

impl ContentMode {
    /// The mode an opening tag named `name` switches to, if any.
    pub(crate) fn for_raw_text_element(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("script") {
            Some(Self::Script)
        } else if name.eq_ignore_ascii_case("style") {
            Some(Self::Style)
        } else {
            None
        }
    }

    /// The element whose end tag leaves this mode.
    pub(crate) const fn raw_text_tag(self) -> Option<&'static str> {
        match self {
            Self::Script => Some("script"),
            Self::Style => Some("style"),
            Self::Normal | Self::Cdata | Self::ProcessingInstruction => None,
        }
    }
}

/// An element on the tag stack, with the span of its opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenElement {
    pub(crate) name: String,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Mutable state for one tokenize run.
#[derive(Debug, Clone, Default)]
pub(crate) struct LexerState {
    /// Open, non-void elements. The last entry is the innermost.
    pub(crate) tag_stack: Vec<OpenElement>,
    pub(crate) mode: ContentMode,
    /// Where the construct that set `mode` began, for unclosed diagnostics.
    pub(crate) mode_start: usize,
}

/// Everything [`Lexer::tokenize`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexOutput {
    /// Tokens in document order. The last one is always [`TokenType::Eof`].
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were recorded.
    pub errors: Vec<LexerError>,
}

impl LexOutput {
    /// True if at least one diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of diagnostics of `kind`.
    #[must_use]
    pub fn error_count(&self, kind: LexerErrorType) -> usize {
        self.errors.iter().filter(|e| e.kind == kind).count()
    }

    /// Tokens of `kind`, in order.
    pub fn tokens_of(&self, kind: TokenType) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.kind == kind)
    }
}

/// Tokenizer for HTML-like markup.
///
/// A `Lexer` only holds the source and its configuration. Every call to
/// [`tokenize`](Self::tokenize) starts from scratch, so the same lexer can be
/// run repeatedly and independent lexers can run on different threads.
///
/// ```
/// use quill_lexer::{Lexer, TokenType};
///
/// let output = Lexer::new("<p>Hi</p>").tokenize();
/// let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenType::OpeningTag, TokenType::Text, TokenType::ClosingTag, TokenType::Eof]
/// );
/// assert!(output.errors.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    strict_mode: bool,
    context_radius: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            strict_mode: false,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }

    /// Create a lexer over raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidSource`] if `bytes` is not UTF-8.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ScanError> {
        Ok(Self::new(std::str::from_utf8(bytes)?))
    }

    /// Enable strict mode - panics instead of recovering from malformed markup.
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Capture `radius` bytes of source on each side of every diagnostic.
    #[must_use]
    pub const fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// The source this lexer reads.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Tokenize the whole source.
    ///
    /// Never fails: malformed input shows up as diagnostics in
    /// [`LexOutput::errors`], and the token list always ends with exactly one
    /// end-of-file token.
    ///
    /// # Panics
    ///
    /// Only in strict mode, on the first malformed construct.
    #[must_use]
    pub fn tokenize(&self) -> LexOutput {
        let mut run = Run::new(self);
        run.scan();
        run.finish()
    }
}

/// One tokenize invocation: the scanner, the state, and what has been
/// produced so far.
pub(super) struct Run<'a> {
    pub(super) scanner: Scanner<'a>,
    pub(super) state: LexerState,
    pub(super) tokens: Vec<Token>,
    pub(super) diagnostics: Diagnostics<'a>,
    /// Offset where the current step began.
    pub(super) start: usize,
    strict_mode: bool,
}

impl<'a> Run<'a> {
    fn new(lexer: &Lexer<'a>) -> Self {
        Self {
            scanner: Scanner::new(lexer.source),
            state: LexerState::default(),
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(lexer.source, lexer.context_radius),
            start: 0,
            strict_mode: lexer.strict_mode,
        }
    }

    /// Run steps until the input is exhausted and no construct is left open.
    ///
    /// Content-mode handlers always return to normal mode at the end of
    /// input, so this terminates.
    fn scan(&mut self) {
        while self.scanner.has_next() || self.state.mode != ContentMode::Normal {
            self.start = self.scanner.cursor();
            if let Err(err) = self.step() {
                self.recover(&err);
            }
        }
    }

    fn step(&mut self) -> Result<(), ScanError> {
        match self.state.mode {
            ContentMode::Normal => self.dispatch(),
            ContentMode::Script | ContentMode::Style => self.lex_raw_text(),
            ContentMode::Cdata => {
                self.lex_cdata();
                Ok(())
            }
            ContentMode::ProcessingInstruction => {
                self.lex_processing_instruction();
                Ok(())
            }
        }
    }

    /// Normal-mode dispatch on the next character.
    fn dispatch(&mut self) -> Result<(), ScanError> {
        match self.scanner.next()? {
            '<' => match self.scanner.peek() {
                Ok('!') => self.lex_markup_declaration(),
                Ok('/') => self.lex_closing_tag(),
                Ok('?') => self.lex_processing_instruction_start(),
                Ok(c) if c.is_ascii_alphabetic() => self.lex_opening_tag(),
                // `1 < 2`, `<3`, `<<b>` or a lone `<` at the end: plain
                // text, never a malformed opening tag
                _ => {
                    self.lex_text();
                    Ok(())
                }
            },
            '&' => {
                self.lex_entity();
                Ok(())
            }
            // Line and column come from the line index, so whitespace
            // between constructs needs no bookkeeping.
            '\n' | ' ' | '\t' | '\r' | '\x0C' => Ok(()),
            _ => {
                self.lex_text();
                Ok(())
            }
        }
    }

    /// The recovery boundary: record the failure and skip to the next `<`.
    fn recover(&mut self, err: &ScanError) {
        debug_assert!(
            !err.is_contract_violation(),
            "lexer handler misused the scanner: {err}"
        );
        let position = self.diagnostics.position(self.start, self.scanner.cursor());
        let message = format!("malformed markup: {err}");
        if self.strict_mode {
            panic!(
                "strict mode: {message} at {}:{}",
                position.line, position.column
            );
        }
        warn_once(
            "Lexer",
            &format!("{message} at {}:{}", position.line, position.column),
        );
        self.diagnostics.record_wide(
            LexerErrorType::MalformedTag,
            message,
            self.start,
            self.scanner.cursor(),
        );

        self.scanner.clear_markers();
        self.state.mode = ContentMode::Normal;
        if self.scanner.cursor() == self.start {
            let _ = self.scanner.next();
        }
        let _ = self.scanner.take_while(|c| c != '<');
    }

    /// Emit the end-of-file token and report every element left open.
    fn finish(mut self) -> LexOutput {
        let end = self.scanner.len();
        let eof = Token::eof(self.diagnostics.position(end, end));
        self.tokens.push(eof);

        for open in std::mem::take(&mut self.state.tag_stack) {
            self.diagnostics.record_wide(
                LexerErrorType::UnclosedTag,
                format!("unclosed tag <{}>", open.name),
                open.start,
                open.end,
            );
        }

        LexOutput {
            tokens: self.tokens,
            errors: self.diagnostics.into_errors(),
        }
    }
}
