//! zssml: a strict parser for a speech synthesis markup (SSML) subset
//!
//! This crate provides functionality to:
//! - Parse markup with a single `<speak>` root into a [`Node`] tree
//! - Reject anything outside the dialect with a detailed [`Error`]
//! - Flatten a tree back to plain text
//! - Render a tree as canonical markup or JSON
//!
//! No general-purpose XML parser is involved: comments, CDATA, processing
//! instructions, DOCTYPE and numeric character references are not part of
//! the dialect and are rejected or kept verbatim.
//!
//! # Examples
//! ```
//! use zssml::{flatten_to_text, parse, Result};
//!
//! fn example() -> Result<()> {
//!     let tree = parse("<speak>Hello <emphasis>world</emphasis>!</speak>")?;
//!     assert_eq!(tree.name(), Some("speak"));
//!     assert_eq!(flatten_to_text(&tree), "Hello world!");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod formatter;
pub mod parser;

// Re-exports
pub use error::{Error, ErrorKind, Pos, Result, Span};
pub use formatter::{flatten_to_text, FormatConfig, Formatter, MarkupFormatter, TextFormatter};
#[cfg(feature = "serde")]
pub use formatter::JsonFormatter;
pub use parser::{
    Attribute, Config, Element, Node, Parser, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE,
    DEFAULT_ROOT_NAME, MAX_DEPTH_CEILING,
};

/// Parse markup with the default configuration
pub fn parse(markup: &str) -> Result<Node> {
    Parser::new(markup).parse()
}

/// Parse markup with a custom configuration
pub fn parse_with_config(markup: &str, config: &Config) -> Result<Node> {
    Parser::with_config(markup, config.clone()).parse()
}
