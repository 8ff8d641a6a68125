//! Token types produced by the markup tokenizer

use crate::error::Span;

/// Markup token kinds
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `<name attrs>` or `<name attrs/>`; `attrs` is the raw attribute text
    StartTag {
        name: String,
        attrs: String,
        self_closing: bool,
    },
    /// `</name>`
    EndTag { name: String },
    /// Raw text between tags, entities not yet decoded
    Text(String),
}

impl TokenKind {
    /// Get token name for log messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StartTag {
                self_closing: true, ..
            } => "self-closing tag",
            Self::StartTag { .. } => "start tag",
            Self::EndTag { .. } => "end tag",
            Self::Text(_) => "text",
        }
    }
}

/// Token with source span
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
