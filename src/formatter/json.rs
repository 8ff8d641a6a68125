use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{FormatConfig, Formatter};
use crate::parser::Node;

/// Writes a tree as JSON: text leaves as strings, elements as objects
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    // A `Node` holds only strings and sequences, and the sink is an in-memory
    // buffer, so serde_json has no error to report here and always emits UTF-8.
    fn format(&self, node: &Node, config: &FormatConfig) -> String {
        if config.indent_spaces == 0 {
            return serde_json::to_string(node).unwrap_or_default();
        }

        let indent = " ".repeat(config.indent_spaces);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        if node.serialize(&mut serializer).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Attribute, Element};

    fn sample() -> Node {
        Node::from(Element {
            name: "speak".to_string(),
            attributes: Vec::new(),
            children: vec![Node::from("hi")],
        })
    }

    #[test]
    fn test_compact() {
        let config = FormatConfig { indent_spaces: 0 };
        assert_eq!(
            JsonFormatter.format(&sample(), &config),
            r#"{"name":"speak","attributes":[],"children":["hi"]}"#
        );
    }

    #[test]
    fn test_awkward_text_round_trips() -> Result<(), serde_json::Error> {
        let node = Node::from(Element {
            name: "speak".to_string(),
            attributes: vec![Attribute::new("q", "say \"hi\"\\")],
            children: vec![Node::from("tab\tnul\u{0}é 🎉 </speak>")],
        });
        for indent_spaces in [0, 2] {
            let out = JsonFormatter.format(&node, &FormatConfig { indent_spaces });
            assert!(!out.is_empty());
            let back: Node = serde_json::from_str(&out)?;
            assert_eq!(back, node);
        }
        Ok(())
    }

    #[test]
    fn test_pretty_indent() {
        let config = FormatConfig { indent_spaces: 4 };
        let out = JsonFormatter.format(&sample(), &config);
        assert!(out.contains("\n    \"name\": \"speak\""));
    }
}
