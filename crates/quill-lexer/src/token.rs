use std::fmt;

use quill_common::Position;
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The complete vocabulary of token kinds.
///
/// The last five kinds are reserved for consumers that split tokens further;
/// the lexer itself never emits them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// `<div ...>`
    OpeningTag,
    /// `</div>`
    ClosingTag,
    /// `<br/>`
    SelfClosingTag,
    /// `<!DOCTYPE html>`, captured verbatim.
    Doctype,
    /// The text between `<!--` and `-->`.
    CommentContent,
    /// The text between `<![CDATA[` and `]]>`.
    CdataContent,
    /// A known named entity such as `&amp;`, kept raw.
    Entity,
    /// Character data between markup.
    Text,
    /// Everything between `<script>` and `</script>`.
    ScriptContent,
    /// Everything between `<style>` and `</style>`.
    StyleContent,
    /// The target name after `<?`.
    PiTarget,
    /// The rest of a processing instruction up to `?>`.
    PiContent,
    /// End of input. Always the last token.
    Eof,
    /// Reserved.
    AttributeName,
    /// Reserved.
    AttributeValue,
    /// Reserved.
    Namespace,
    /// Reserved.
    TemplateStart,
    /// Reserved.
    TemplateEnd,
}

impl TokenType {
    /// True for kinds that are part of the vocabulary but never emitted.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::AttributeName
                | Self::AttributeValue
                | Self::Namespace
                | Self::TemplateStart
                | Self::TemplateEnd
        )
    }

    /// True for the three tag kinds.
    #[must_use]
    pub const fn is_tag(self) -> bool {
        matches!(
            self,
            Self::OpeningTag | Self::ClosingTag | Self::SelfClosingTag
        )
    }
}

/// An attribute on an opening or self-closing tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Name as written.
    pub name: String,
    /// Value without its quotes. Empty for `<input disabled>`.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Extra facts recorded on tag tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// The element is in [`VOID_ELEMENTS`](crate::tables::VOID_ELEMENTS).
    pub is_void: bool,
    /// The tag name contains a hyphen (`<my-widget>`).
    pub is_custom_element: bool,
    /// Prefix of a `prefix:name` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// The tag exactly as it appeared in the source.
    pub raw: String,
}

/// A token. Tokens are emitted in document order and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// What kind of token this is.
    #[serde(rename = "type")]
    pub kind: TokenType,
    /// Literal text for text and content tokens; the tag or entity otherwise.
    pub value: String,
    /// Where the token came from.
    pub position: Position,
    /// Attributes, in source order. Only opening and self-closing tags have any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Present on tag tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
}

impl Token {
    /// A token with no attributes and no metadata.
    #[must_use]
    pub fn new(kind: TokenType, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
            attributes: Vec::new(),
            metadata: None,
        }
    }

    /// The end-of-file token. Its value is always empty.
    #[must_use]
    pub fn eof(position: Position) -> Self {
        Self::new(TokenType::Eof, "", position)
    }

    /// Attach attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attach metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }

    /// True for a void element's opening tag.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| m.is_void)
    }

    /// Look up an attribute value by name. Case-insensitive.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)?;
        for attr in &self.attributes {
            write!(f, " {}={:?}", attr.name, attr.value)?;
        }
        write!(f, " @{}:{}", self.position.line, self.position.column)
    }
}
