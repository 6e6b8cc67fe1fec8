//! Streaming, error-tolerant tokenizer for HTML-like markup.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanner** - a character cursor with mark/reset backtracking
//! - **Lexer** - a single-pass state machine producing tags, text, comments,
//!   doctypes, CDATA sections, processing instructions, entities and raw
//!   script/style content
//! - **Diagnostics** - malformed input is recorded with position and context
//!   and the lexer carries on; tokenizing never fails
//! - **Tables** - void elements, raw-text elements, boolean attributes,
//!   named entities and the escape map
//! - **Serializer** - writes a token stream back out as markup
//!
//! # Not Implemented
//!
//! - Tree construction and tag-omission rules
//! - Numeric character references
//! - Decoding entities inside text or attribute values

/// Diagnostic collection and summaries.
pub mod diagnostics;
/// Scanner failures and user-facing diagnostics.
pub mod error;
/// The tokenizer state machine.
pub mod lexer;
/// Character cursor over the source.
pub mod scanner;
/// Token stream to markup.
pub mod serialize;
/// Element, attribute and entity tables.
pub mod tables;
/// Token vocabulary.
pub mod token;

pub use diagnostics::summarize;
pub use error::{LexerError, LexerErrorType, ScanError};
pub use lexer::{LexOutput, Lexer};
pub use scanner::Scanner;
pub use token::{Attribute, Token, TokenMetadata, TokenType};
