//! Output formats for parsed trees

#[cfg(feature = "serde")]
mod json;
mod markup;
mod text;

#[cfg(feature = "serde")]
pub use self::json::JsonFormatter;
pub use self::{
    markup::MarkupFormatter,
    text::{flatten_to_text, TextFormatter},
};
use crate::parser::Node;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation (0 writes compact output)
    pub indent_spaces: usize,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

/// Trait for formatting a Node as a string
pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String;
}
