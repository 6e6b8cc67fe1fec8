//! Tests for writing token streams back out as markup.

use quill_lexer::Lexer;
use quill_lexer::serialize::to_markup;

/// Helper to tokenize and immediately serialize
fn reserialize(input: &str) -> String {
    to_markup(&Lexer::new(input).tokenize().tokens)
}

#[test]
fn test_well_formed_markup_is_unchanged() {
    let input = r#"<!DOCTYPE html><html><body class="main"><p>Fish&amp;Chips</p><br/></body></html>"#;
    assert_eq!(reserialize(input), input);
}

#[test]
fn test_quotes_are_normalised() {
    assert_eq!(reserialize("<a href='/x' id=top></a>"), r#"<a href="/x" id="top"></a>"#);
}

#[test]
fn test_boolean_attributes_render_bare() {
    assert_eq!(
        reserialize("<input disabled checked=\"\" name>"),
        r#"<input disabled checked name="">"#
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    assert_eq!(
        reserialize(r#"<p title='say "hi"'></p>"#),
        r#"<p title="say &quot;hi&quot;"></p>"#
    );
}

#[test]
fn test_invalid_references_are_escaped() {
    assert_eq!(reserialize("Fish & Chips"), "Fish &amp; Chips");
}

#[test]
fn test_raw_content_is_verbatim() {
    let input = "<script>if (a < b && c) {}</script><style>p > a {}</style>";
    assert_eq!(reserialize(input), input);
}

#[test]
fn test_comments_cdata_and_processing_instructions() {
    let input = r#"<?xml version="1.0"?><!-- note --><![CDATA[<raw>]]>"#;
    assert_eq!(reserialize(input), input);
}

#[test]
fn test_whitespace_between_tags_is_dropped() {
    assert_eq!(reserialize("<ul>\n  <li>a</li>\n</ul>\n"), "<ul><li>a</li></ul>");
}
