//! Error types for zssml
//!
//! Every rejection is an "invalid markup" error. The [`ErrorKind`] says which
//! check failed and the [`Span`] points into the normalized input.

use std::fmt;
use thiserror::Error;

/// Position in the normalized input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in the normalized input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Which structural check rejected the input
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("input must start with '<'")]
    LeadingText,
    #[error("unterminated tag")]
    UnterminatedTag,
    #[error("invalid tag name {name:?}")]
    InvalidTagName { name: String },
    #[error("{}", mismatch_message(.expected.as_deref(), .found))]
    MismatchedCloseTag {
        expected: Option<String>,
        found: String,
    },
    #[error("unclosed tag(s) remain: {}", .open.join(", "))]
    UnclosedTags { open: Vec<String> },
    #[error("expected exactly one root element, found {found} top-level nodes")]
    RootCount { found: usize },
    #[error("root must be an element, found text")]
    RootIsText,
    #[error("root element must be <{expected}>, found <{found}>")]
    WrongRootName { expected: String, found: String },
    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: u16 },
    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
}

fn mismatch_message(expected: Option<&str>, found: &str) -> String {
    match expected {
        Some(expected) => format!("mismatched close tag: expected </{expected}>, found </{found}>"),
        None => format!("unbalanced close tag </{found}>"),
    }
}

/// Main error type for zssml
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("invalid markup at {}: {kind}", .span.start)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
}

impl Error {
    pub const fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create error at a single position
    pub const fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::new(pos, pos))
    }

    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub const fn span(&self) -> Span {
        self.span
    }
}

/// Result type alias for zssml
pub type Result<T> = std::result::Result<T, Error>;
