//! The tokenizer state machine.
//!
//! [`Lexer::tokenize`] runs one pass over the source. Each step looks at the
//! current content mode and either dispatches on the next character (normal
//! mode) or hands control to the handler that owns the active raw-content
//! construct until its terminator is found.

/// Raw content modes: script, style, CDATA and processing instructions.
mod content;
/// Named entity references.
mod entity;
/// Token emission and small reading helpers.
mod helpers;
/// Lexer configuration, per-run state and the main loop.
mod machine;
/// `<!` declarations: comments, doctypes and CDATA entry.
mod markup;
/// Opening tags, closing tags and attributes.
mod tags;

pub use machine::{LexOutput, Lexer};
