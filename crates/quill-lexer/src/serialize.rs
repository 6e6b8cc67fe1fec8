//! Writing a token stream back out as markup.
//!
//! The output is equivalent markup, not the source text. Whitespace-only
//! runs between tags are not tokens, so they are not reproduced. Attribute
//! values are always written with `"` quotes.

use std::fmt::Write;

use crate::tables::{escape_attribute, escape_text, is_boolean_attribute};
use crate::token::{Attribute, Token, TokenType};

/// Serialize `tokens` to markup.
///
/// ```
/// use quill_lexer::{Lexer, serialize::to_markup};
///
/// let output = Lexer::new("<input type='checkbox' checked><p>1 < 2</p>").tokenize();
/// assert_eq!(
///     to_markup(&output.tokens),
///     r#"<input type="checkbox" checked><p>1 &lt; 2</p>"#
/// );
/// ```
#[must_use]
pub fn to_markup(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        write_token(&mut out, token);
    }
    out
}

fn write_token(out: &mut String, token: &Token) {
    let value = token.value.as_str();
    match token.kind {
        TokenType::OpeningTag | TokenType::SelfClosingTag => {
            out.push('<');
            out.push_str(value);
            for attr in &token.attributes {
                write_attribute(out, attr);
            }
            if token.kind == TokenType::SelfClosingTag {
                out.push('/');
            }
            out.push('>');
        }
        TokenType::ClosingTag => {
            let _ = write!(out, "</{value}>");
        }
        TokenType::CommentContent => {
            let _ = write!(out, "<!--{value}-->");
        }
        TokenType::CdataContent => {
            let _ = write!(out, "<![CDATA[{value}]]>");
        }
        TokenType::PiTarget => {
            let _ = write!(out, "<?{value}");
        }
        TokenType::PiContent => {
            let _ = write!(out, "{value}?>");
        }
        TokenType::Text => out.push_str(&escape_text(value)),
        // doctypes and entities are already raw markup; script and style
        // content must not be escaped
        TokenType::Doctype
        | TokenType::Entity
        | TokenType::ScriptContent
        | TokenType::StyleContent => out.push_str(value),
        TokenType::Eof
        | TokenType::AttributeName
        | TokenType::AttributeValue
        | TokenType::Namespace
        | TokenType::TemplateStart
        | TokenType::TemplateEnd => {}
    }
}

fn write_attribute(out: &mut String, attr: &Attribute) {
    if attr.value.is_empty() && is_boolean_attribute(&attr.name) {
        let _ = write!(out, " {}", attr.name);
    } else {
        let _ = write!(out, " {}=\"{}\"", attr.name, escape_attribute(&attr.value));
    }
}
