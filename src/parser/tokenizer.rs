//! Tokenizer and structural validator
//!
//! Scans normalized markup once, left to right, splitting it into tag and
//! text tokens. An explicit stack of open tag names enforces that every close
//! tag matches the innermost open tag and that nothing is left open at the
//! end. Self-closing tags never touch the stack.

use tracing::trace;

use super::config::Config;
use super::cursor::Cursor;
use super::token::{Token, TokenKind};
use crate::error::{Error, ErrorKind, Result, Span};

/// Tokenizer over normalized markup
#[derive(Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    config: &'a Config,
    open: Vec<String>,
}

impl<'a> Tokenizer<'a> {
    pub const fn new(input: &'a str, config: &'a Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            open: Vec::new(),
        }
    }

    /// Tokenize the whole input, rejecting structurally invalid markup
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        if self.cursor.current() != Some('<') {
            return Err(Error::at(ErrorKind::LeadingText, self.cursor.position()));
        }

        let mut tokens = Vec::new();
        while let Some(c) = self.cursor.current() {
            let token = if c == '<' {
                self.read_tag()?
            } else {
                self.read_text()
            };
            trace!(kind = token.kind.name(), at = %token.span.start, "token");
            self.track(&token)?;
            tokens.push(token);
        }

        if !self.open.is_empty() {
            let end = self.cursor.position();
            return Err(Error::at(ErrorKind::UnclosedTags { open: self.open }, end));
        }

        Ok(tokens)
    }

    fn read_tag(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        self.cursor.advance();
        let body_start = self.cursor.pos();

        let mut quote: Option<char> = None;
        loop {
            let Some(c) = self.cursor.current() else {
                return Err(Error::at(ErrorKind::UnterminatedTag, start));
            };
            match (quote, c) {
                (None, '>') => break,
                (None, '"' | '\'') => quote = Some(c),
                (Some(q), _) if c == q => quote = None,
                _ => {}
            }
            self.cursor.advance();
        }

        let body = self.cursor.slice_from(body_start);
        self.cursor.advance();
        let span = Span::new(start, self.cursor.position());

        let kind = classify_tag(body).map_err(|kind| Error::new(kind, span))?;
        Ok(Token::new(kind, span))
    }

    fn read_text(&mut self) -> Token {
        let start = self.cursor.position();
        let text = self.cursor.eat_while(|c| c != '<');
        let span = Span::new(start, self.cursor.position());
        Token::new(TokenKind::Text(text.to_string()), span)
    }

    fn track(&mut self, token: &Token) -> Result<()> {
        match &token.kind {
            TokenKind::StartTag {
                name,
                self_closing: false,
                ..
            } => {
                self.open.push(name.clone());
                if self.config.depth_exceeded(self.open.len()) {
                    return Err(Error::new(
                        ErrorKind::MaxDepthExceeded {
                            max: self.config.effective_max_depth(),
                        },
                        token.span,
                    ));
                }
            }
            TokenKind::EndTag { name } => match self.open.pop() {
                Some(open) if open == *name => {}
                expected => {
                    return Err(Error::new(
                        ErrorKind::MismatchedCloseTag {
                            expected,
                            found: name.clone(),
                        },
                        token.span,
                    ));
                }
            },
            TokenKind::StartTag { .. } | TokenKind::Text(_) => {}
        }
        Ok(())
    }
}

/// Classify the text between `<` and `>`, dropping the spacing after `<`,
/// after `</`, before `/>` and before `>`.
fn classify_tag(body: &str) -> std::result::Result<TokenKind, ErrorKind> {
    let body = body.trim();

    if let Some(rest) = body.strip_prefix('/') {
        let name = rest.split_whitespace().next().unwrap_or_default();
        validate_name(name)?;
        return Ok(TokenKind::EndTag {
            name: name.to_string(),
        });
    }

    let (body, self_closing) = match body.strip_suffix('/') {
        Some(inner) => (inner.trim_end(), true),
        None => (body, false),
    };

    let (name, attrs) = body
        .split_once(char::is_whitespace)
        .map_or((body, ""), |(name, attrs)| (name, attrs.trim()));
    validate_name(name)?;

    Ok(TokenKind::StartTag {
        name: name.to_string(),
        attrs: attrs.to_string(),
        self_closing,
    })
}

fn validate_name(name: &str) -> std::result::Result<(), ErrorKind> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(ErrorKind::InvalidTagName {
            name: name.to_string(),
        })
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | ':')
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || matches!(c, '-' | '.')
}
