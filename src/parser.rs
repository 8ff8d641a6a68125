//! Markup parser
//!
//! Raw text goes through four stages: whitespace normalization, tokenizing
//! with structural validation, tree building and the root check. Any stage
//! may reject the input; nothing partial is ever returned.

pub mod attributes;
pub mod builder;
pub mod config;
pub mod cursor;
pub mod entities;
pub mod node;
pub mod normalize;
pub mod token;
pub mod tokenizer;

pub use builder::TreeBuilder;
pub use config::{
    Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, DEFAULT_ROOT_NAME, MAX_DEPTH_CEILING,
};
pub use node::{Attribute, Element, Node};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result, Span};
use self::normalize::normalize;

/// Markup parser holding its input and configuration
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    config: Config,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(input: &'a str, config: Config) -> Self {
        Self { input, config }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the input into a tree rooted at the configured root element
    #[instrument(skip_all, fields(len = self.input.len(), root = %self.config.root_name))]
    pub fn parse(&self) -> Result<Node> {
        if self.config.size_exceeded(self.input.len()) {
            debug!("input too large");
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Span::empty(),
            ));
        }

        let normalized = normalize(self.input, self.config.preserve_attribute_whitespace);
        debug!(len = normalized.len(), "normalized input");

        let tokens = Tokenizer::new(&normalized, &self.config)
            .tokenize()
            .inspect_err(|err| debug!(%err, "rejected by structural validation"))?;
        debug!(tokens = tokens.len(), "tokenized input");

        let nodes = TreeBuilder::new(tokens).build();
        let root = validate_root(nodes, &self.config.root_name)
            .inspect_err(|err| debug!(%err, "rejected by root validation"))?;
        debug!("parsed document");

        Ok(root)
    }
}

/// Require exactly one top-level node, an element named `root_name`
fn validate_root(nodes: Vec<(Node, Span)>, root_name: &str) -> Result<Node> {
    let found = nodes.len();
    let mut nodes = nodes.into_iter();

    let (root, span) = match (nodes.next(), nodes.next()) {
        (Some(root), None) => root,
        (None, _) => return Err(Error::new(ErrorKind::RootCount { found }, Span::empty())),
        (Some(_), Some((_, span))) => {
            return Err(Error::new(ErrorKind::RootCount { found }, span));
        }
    };

    match root {
        Node::Element(element) if element.name == root_name => Ok(Node::Element(element)),
        Node::Element(element) => Err(Error::new(
            ErrorKind::WrongRootName {
                expected: root_name.to_string(),
                found: element.name,
            },
            span,
        )),
        Node::Text(_) => Err(Error::new(ErrorKind::RootIsText, span)),
    }
}
