//! Tree types produced by the parser

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a parsed markup tree.
///
/// With the `serde` feature a text leaf serializes as a bare string and an
/// element as an object with `name`, `attributes` and `children`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node {
    /// A tag with its attributes and children
    Element(Element),
    /// Text content with entities already decoded
    Text(String),
}

/// A markup element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    pub name: String,
    /// Attributes in document order; duplicates are kept
    pub attributes: Vec<Attribute>,
    /// Children in document order
    pub children: Vec<Node>,
}

/// A `name="value"` pair; the value is kept exactly as written
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl Node {
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Element(_) => None,
        }
    }

    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Element name, `None` for text
    pub fn name(&self) -> Option<&str> {
        self.as_element().map(|element| element.name.as_str())
    }

    /// All text content, see [`crate::flatten_to_text`]
    pub fn text(&self) -> String {
        crate::formatter::flatten_to_text(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
