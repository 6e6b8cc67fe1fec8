//! Static classification tables.
//!
//! Tree builders and serializers downstream of the lexer are expected to
//! classify elements exactly the way the lexer did, so these tables are part
//! of the public surface. All of them are immutable and shared process-wide.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is captured verbatim instead of being tokenized.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Attributes that are meaningful without a value (`<input disabled>`).
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "hidden",
    "ismap",
    "loop",
    "multiple",
    "muted",
    "novalidate",
    "open",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// Characters that must be escaped when writing text or attribute values
/// back out as markup.
pub const ESCAPE_MAP: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

/// Length in bytes of the longest raw reference in the named-entity table,
/// `&` and `;` included.
pub const MAX_ENTITY_LEN: usize = 8;

/// The named-entity table, keyed by the full raw reference including `&`
/// and `;`.
///
/// NOTE: Only the semicolon forms are recognized. Numeric references
/// (`&#123;`) are not in the table and are reported as invalid.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&amp;", "&"),
        ("&quot;", "\""),
        ("&apos;", "'"),
        ("&nbsp;", "\u{00A0}"),
        ("&copy;", "\u{00A9}"),  // ©
        ("&reg;", "\u{00AE}"),   // ®
        ("&trade;", "\u{2122}"), // ™
        ("&mdash;", "\u{2014}"),
        ("&ndash;", "\u{2013}"),
        ("&euro;", "\u{20AC}"),  // €
        ("&pound;", "\u{00A3}"), // £
        ("&cent;", "\u{00A2}"),  // ¢
        ("&yen;", "\u{00A5}"),   // ¥
        ("&hellip;", "\u{2026}"),
        ("&bull;", "\u{2022}"),
        ("&middot;", "\u{00B7}"),
        ("&laquo;", "\u{00AB}"),
        ("&raquo;", "\u{00BB}"),
        ("&lsquo;", "\u{2018}"),
        ("&rsquo;", "\u{2019}"),
        ("&ldquo;", "\u{201C}"),
        ("&rdquo;", "\u{201D}"),
        ("&times;", "\u{00D7}"),
        ("&divide;", "\u{00F7}"),
        ("&deg;", "\u{00B0}"),
        ("&plusmn;", "\u{00B1}"),
    ])
});

/// True if `name` is a void element. Case-insensitive.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// True if `name` is a raw-text element. Case-insensitive.
#[must_use]
pub fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// True if `name` is a boolean attribute. Case-insensitive.
#[must_use]
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES
        .iter()
        .any(|v| v.eq_ignore_ascii_case(name))
}

/// True if `raw` (e.g. `"&amp;"`) is a known named entity.
#[must_use]
pub fn is_known_entity(raw: &str) -> bool {
    NAMED_ENTITIES.contains_key(raw)
}

/// Replacement text for a raw entity reference.
///
/// ```
/// use quill_lexer::tables::decode_entity;
/// assert_eq!(decode_entity("&lt;"), Some("<"));
/// assert_eq!(decode_entity("&bogus;"), None);
/// ```
#[must_use]
pub fn decode_entity(raw: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(raw).copied()
}

fn escape_with(input: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !input.chars().any(&needs_escape) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match ESCAPE_MAP.iter().find(|(from, _)| *from == c) {
            Some((_, to)) if needs_escape(c) => out.push_str(to),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape `&`, `<` and `>` for use as element text.
#[must_use]
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape_with(input, |c| matches!(c, '&' | '<' | '>'))
}

/// Escape every character in [`ESCAPE_MAP`] for use inside a quoted
/// attribute value.
#[must_use]
pub fn escape_attribute(input: &str) -> Cow<'_, str> {
    escape_with(input, |c| ESCAPE_MAP.iter().any(|(from, _)| *from == c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_entity_len_matches_table() {
        let longest = NAMED_ENTITIES.keys().map(|raw| raw.len()).max();
        assert_eq!(longest, Some(MAX_ENTITY_LEN));
    }
}
