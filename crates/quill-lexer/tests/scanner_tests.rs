//! Integration tests for the scanner.

use quill_lexer::{ScanError, Scanner};

#[test]
fn test_next_and_peek() {
    let mut scanner = Scanner::new("ab");
    assert!(scanner.has_next());
    assert_eq!(scanner.peek(), Ok('a'));
    assert_eq!(scanner.next(), Ok('a'));
    assert_eq!(scanner.next(), Ok('b'));
    assert!(!scanner.has_next());
}

#[test]
fn test_next_at_end_of_input() {
    let mut scanner = Scanner::new("x");
    let _ = scanner.next().unwrap();
    assert_eq!(scanner.next(), Err(ScanError::UnexpectedEof { position: 1 }));
    assert_eq!(scanner.peek(), Err(ScanError::UnexpectedEof { position: 1 }));
    assert_eq!(scanner.cursor(), 1);
}

#[test]
fn test_peek_next() {
    let scanner = Scanner::new("</p>");
    assert_eq!(scanner.peek_next(0), Ok('<'));
    assert_eq!(scanner.peek_next(1), Ok('/'));
    assert_eq!(scanner.peek_next(3), Ok('>'));
    assert!(scanner.peek_next(4).is_err());
    assert_eq!(scanner.cursor(), 0);
}

#[test]
fn test_multibyte_characters() {
    let mut scanner = Scanner::new("é<");
    assert_eq!(scanner.next(), Ok('é'));
    assert_eq!(scanner.cursor(), 2);
    assert_eq!(scanner.peek(), Ok('<'));
    scanner.rewind(1).unwrap();
    assert_eq!(scanner.cursor(), 0);
}

#[test]
fn test_rewind() {
    let mut scanner = Scanner::new("abcd");
    let _ = scanner.take_while(|_| true);
    scanner.rewind(2).unwrap();
    assert_eq!(scanner.peek(), Ok('c'));
    scanner.rewind(0).unwrap();
    assert_eq!(scanner.cursor(), 2);
}

#[test]
fn test_rewind_past_start() {
    let mut scanner = Scanner::new("abc");
    let _ = scanner.next().unwrap();
    let err = scanner.rewind(2).unwrap_err();
    assert_eq!(
        err,
        ScanError::InvalidRewind {
            requested: 2,
            cursor: 1
        }
    );
    assert!(err.is_contract_violation());
    // cursor untouched on failure
    assert_eq!(scanner.cursor(), 1);
}

#[test]
fn test_match_char() {
    let mut scanner = Scanner::new("/>");
    assert!(!scanner.match_char('>'));
    assert_eq!(scanner.cursor(), 0);
    assert!(scanner.match_char('/'));
    assert!(scanner.match_char('>'));
    assert!(!scanner.match_char('>'));
}

#[test]
fn test_consume_str() {
    let mut scanner = Scanner::new("<!--x");
    assert!(!scanner.consume_str("<!DOCTYPE"));
    assert_eq!(scanner.cursor(), 0);
    assert!(scanner.consume_str("<!--"));
    assert_eq!(scanner.remaining(), "x");
}

#[test]
fn test_nested_markers() {
    let mut scanner = Scanner::new("abcdef");
    scanner.mark();
    let _ = scanner.next().unwrap();
    scanner.mark();
    let _ = scanner.take_while(|c| c != 'e');
    assert_eq!(scanner.marker_depth(), 2);

    scanner.reset();
    assert_eq!(scanner.cursor(), 1);
    scanner.reset();
    assert_eq!(scanner.cursor(), 0);
    assert_eq!(scanner.marker_depth(), 0);
}

#[test]
fn test_reset_without_marker_is_noop() {
    let mut scanner = Scanner::new("abc");
    let _ = scanner.next().unwrap();
    scanner.reset();
    assert_eq!(scanner.cursor(), 1);
}

#[test]
fn test_clear_markers() {
    let mut scanner = Scanner::new("abc");
    scanner.mark();
    scanner.mark();
    let _ = scanner.next().unwrap();
    scanner.clear_markers();
    scanner.reset();
    assert_eq!(scanner.cursor(), 1);
}

#[test]
fn test_introspection() {
    let mut scanner = Scanner::new("<p>hi</p>");
    assert_eq!(scanner.len(), 9);
    assert!(!scanner.is_empty());
    assert!(scanner.consume_str("<p>"));
    assert!(scanner.starts_with("hi"));
    assert_eq!(scanner.remaining(), "hi</p>");
    assert_eq!(scanner.source_segment(3, 5), "hi");
    assert!(Scanner::new("").is_empty());
}
