use std::fmt;

use super::{FormatConfig, Formatter};
use crate::parser::entities::escape;
use crate::parser::{Element, Node};

/// Writes a tree back out as compact markup
pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn format(&self, node: &Node, _config: &FormatConfig) -> String {
        node.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => f.write_str(&escape(text)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        // values are written raw; one holding both quote kinds will not re-parse
        for attr in &self.attributes {
            let quote = if attr.value.contains('"') { '\'' } else { '"' };
            write!(f, " {}={quote}{}{quote}", attr.name, attr.value)?;
        }

        if self.children.is_empty() {
            return f.write_str("/>");
        }

        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.name)
    }
}
