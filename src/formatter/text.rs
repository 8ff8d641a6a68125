use super::{FormatConfig, Formatter};
use crate::parser::Node;

/// Flattens a tree to its text content
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, node: &Node, _config: &FormatConfig) -> String {
        flatten_to_text(node)
    }
}

/// Concatenate every text leaf under `node`, depth-first and left to right.
///
/// Element names and attributes are skipped. Walks with an explicit stack,
/// so nesting depth is not bounded by the call stack.
pub fn flatten_to_text(node: &Node) -> String {
    let mut out = String::new();
    let mut pending = vec![node];

    while let Some(node) = pending.pop() {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => pending.extend(element.children.iter().rev()),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Attribute, Element};

    #[test]
    fn test_lone_text() {
        assert_eq!(flatten_to_text(&Node::from("hi")), "hi");
    }

    #[test]
    fn test_childless_element() {
        assert_eq!(flatten_to_text(&Node::from(Element::new("speak"))), "");
    }

    #[test]
    fn test_order_and_attributes_skipped() {
        let node = Node::from(Element {
            name: "speak".to_string(),
            attributes: vec![Attribute::new("lang", "en")],
            children: vec![
                Node::from("Hello "),
                Node::from(Element {
                    name: "emphasis".to_string(),
                    attributes: Vec::new(),
                    children: vec![Node::from("wor"), Node::from("ld")],
                }),
                Node::from("!"),
            ],
        });
        assert_eq!(flatten_to_text(&node), "Hello world!");
        assert_eq!(flatten_to_text(&node), "Hello world!");
    }

    #[test]
    fn test_deep_nesting() {
        let mut node = Node::from("deep");
        for _ in 0..100_000 {
            node = Node::from(Element {
                name: "p".to_string(),
                attributes: Vec::new(),
                children: vec![node],
            });
        }
        assert_eq!(flatten_to_text(&node), "deep");
        // dropping a tree this deep recurses, so leak it instead
        std::mem::forget(node);
    }
}
