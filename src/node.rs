//! Typed element construction.
//!
//! A [`Node`] is a detached element value: tag name, ordered attributes, and
//! ordered children (text or nested elements). Nodes are rendered to an HTML
//! fragment only at insertion time, with standard text/attribute escaping, so
//! a directive list can be built and inspected without touching a document.

use std::fmt::Write as _;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Void elements cannot have children and don't need closing tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// A detached HTML element, built up with a consuming-builder API.
///
/// # Example
///
/// ```rust
/// use html_insert::Node;
///
/// let node = Node::new("p").attr("class", "note").text("zamboni");
/// assert_eq!(node.to_html()?, r#"<p class="note">zamboni</p>"#);
/// # Ok::<(), html_insert::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
    /// Tag name, lowercased at construction.
    #[serde(deserialize_with = "tag_lowercase")]
    tag: String,

    /// Attributes in insertion order.
    #[serde(default, deserialize_with = "attrs_from_map")]
    attrs: Vec<(String, String)>,

    /// Child nodes in document order.
    #[serde(default)]
    children: Vec<NodeChild>,
}

/// One child of a [`Node`]: either a text run or a nested element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeChild {
    /// A text run, escaped on render.
    Text(String),
    /// A nested element.
    Element(Node),
}

impl Node {
    /// Creates an element with the given tag name and no attributes or
    /// children. The tag is lowercased; validity is checked on render.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, keeping insertion order.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(NodeChild::Text(text.to_string()));
        self
    }

    /// Appends an element child.
    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(NodeChild::Element(child));
        self
    }

    /// Tag name (lowercase).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Renders the element to an HTML fragment string.
    ///
    /// Fails with [`Error::Insertion`] on an invalid tag name, an invalid
    /// attribute name, or children under a void element.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.render(&mut out)?;
        Ok(out)
    }

    pub(crate) fn render(&self, out: &mut String) -> Result<()> {
        if !is_valid_tag_name(&self.tag) {
            return Err(Error::Insertion(format!("invalid tag name {:?}", self.tag)));
        }

        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            if !is_valid_attr_name(name) {
                return Err(Error::Insertion(format!(
                    "invalid attribute name {name:?} on <{}>",
                    self.tag
                )));
            }
            let _ = write!(out, " {name}=\"");
            escape_attr(value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            if !self.children.is_empty() {
                return Err(Error::Insertion(format!(
                    "void element <{}> cannot have children",
                    self.tag
                )));
            }
            return Ok(());
        }

        for child in &self.children {
            match child {
                NodeChild::Text(text) => escape_text(text, out),
                NodeChild::Element(node) => node.render(out)?,
            }
        }

        let _ = write!(out, "</{}>", self.tag);
        Ok(())
    }
}

/// Tag names: ASCII letter first, then letters, digits, or `-` (custom
/// elements).
fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Attribute names: non-empty, free of whitespace and markup delimiters.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_ascii_whitespace() && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}

/// Escapes a text run for element content.
pub(crate) fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Escapes an attribute value for a double-quoted attribute.
fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn tag_lowercase<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|tag| tag.to_ascii_lowercase())
}

/// Deserializes attributes from a JSON map, preserving source order.
fn attrs_from_map<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct AttrsVisitor;

    impl<'de> Visitor<'de> for AttrsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a map of attribute names to string values")
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut attrs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, value)) = map.next_entry::<String, String>()? {
                attrs.push((name, value));
            }
            Ok(attrs)
        }
    }

    deserializer.deserialize_map(AttrsVisitor)
}
