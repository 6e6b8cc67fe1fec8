//! Property tests for the lexer.

use quickcheck_macros::quickcheck;
use quill_lexer::tables::VOID_ELEMENTS;
use quill_lexer::{Lexer, LexerErrorType, TokenType};

/// Elements that are neither void nor raw text.
const CONTAINERS: &[&str] = &["div", "span", "p", "em", "section", "ul", "li"];

/// A small alphabet that makes entity references likely.
const ENTITY_ALPHABET: &[char] = &['a', 'm', 'p', 'l', 't', 'x', ';', '&', ' ', '#'];

fn pick<T: Copy>(items: &[T], seed: u8) -> T {
    items[usize::from(seed) % items.len()]
}

#[quickcheck]
fn prop_single_trailing_eof(input: String) -> bool {
    let output = Lexer::new(&input).tokenize();
    let eofs = output.tokens.iter().filter(|t| t.is_eof()).count();
    eofs == 1 && output.tokens.last().is_some_and(|t| t.kind == TokenType::Eof)
}

#[quickcheck]
fn prop_markup_heavy_input_terminates(seeds: Vec<u8>) -> bool {
    const PIECES: &[&str] = &[
        "<", ">", "/", "!", "?", "-", "=", "\"", "'", "&", ";", "[CDATA[", "]]>", "script",
        "style", "div", " ", "\n", "x",
    ];
    let input: String = seeds
        .iter()
        .map(|&s| pick(PIECES, s))
        .collect();
    let output = Lexer::new(&input).tokenize();
    output.tokens.last().is_some_and(|t| t.is_eof())
}

#[quickcheck]
fn prop_well_formed_nesting_has_no_errors(seeds: Vec<u8>) -> bool {
    let names: Vec<&str> = seeds.iter().map(|&s| pick(CONTAINERS, s)).collect();
    let mut input = String::new();
    for name in &names {
        input.push_str(&format!("<{name}>text"));
    }
    for name in names.iter().rev() {
        input.push_str(&format!("</{name}>"));
    }
    Lexer::new(&input).tokenize().errors.is_empty()
}

#[quickcheck]
fn prop_void_and_self_closing_tags_are_never_unclosed(seeds: Vec<u8>) -> bool {
    let input: String = seeds
        .iter()
        .map(|&s| {
            if s % 2 == 0 {
                format!("<{}>", pick(VOID_ELEMENTS, s))
            } else {
                format!("<{}/>", pick(CONTAINERS, s))
            }
        })
        .collect();
    let output = Lexer::new(&input).tokenize();
    output.error_count(LexerErrorType::UnclosedTag) == 0 && output.errors.is_empty()
}

#[quickcheck]
fn prop_entity_fallback_loses_no_text(seeds: Vec<u8>) -> bool {
    let input: String = seeds
        .iter()
        .map(|&s| pick(ENTITY_ALPHABET, s))
        .collect();
    let output = Lexer::new(&input).tokenize();
    let reconstructed: String = output
        .tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenType::Text | TokenType::Entity))
        .flat_map(|t| t.value.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    reconstructed == expected
}
