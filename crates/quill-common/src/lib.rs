//! Common utilities for the Quill tokenizer.
//!
//! This crate provides shared infrastructure used by the lexer and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for recovery events
//! - **Source Positions** - byte spans with line/column resolution

pub mod span;
pub mod warning;

pub use span::{LineIndex, Position};
