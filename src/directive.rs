//! Insertion directives.
//!
//! A [`Directive`] pairs a CSS selector with the content to insert and an
//! [`Action`] describing how that content combines with the matched elements'
//! existing children. Directive lists are applied strictly in order, so a
//! later directive observes the tree as left by earlier ones.

use serde::Deserialize;

use crate::error::Result;
use crate::node::{escape_text, Node};

/// How inserted content combines with an element's existing children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Insert before the existing children.
    Prepend,
    /// Insert after the existing children.
    Append,
    /// Discard the existing children and insert as the sole content.
    /// This is the default when a directive omits the action.
    #[default]
    Replace,
}

/// Content to insert: raw text, one element, or an ordered list of elements.
///
/// The variant is fixed at construction time; raw text becomes a single
/// escaped text node at insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeInput {
    /// A bare text run.
    Text(String),
    /// A single element.
    Single(Node),
    /// An ordered sequence of elements, inserted in the given order.
    Many(Vec<Node>),
}

impl NodeInput {
    /// Renders the input to an HTML fragment string.
    pub(crate) fn to_html(&self) -> Result<String> {
        match self {
            Self::Text(text) => {
                let mut out = String::new();
                escape_text(text, &mut out);
                Ok(out)
            }
            Self::Single(node) => node.to_html(),
            Self::Many(nodes) => {
                let mut out = String::new();
                for node in nodes {
                    node.render(&mut out)?;
                }
                Ok(out)
            }
        }
    }
}

impl From<&str> for NodeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for NodeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for NodeInput {
    fn from(node: Node) -> Self {
        Self::Single(node)
    }
}

impl From<Vec<Node>> for NodeInput {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Many(nodes)
    }
}

/// One insertion instruction: selector, content, action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Directive {
    /// CSS selector resolved against the current tree state. Every matched
    /// element is mutated; no match makes the directive a silent no-op.
    pub selector: String,

    /// Content to insert.
    pub insert: NodeInput,

    /// How the content combines with existing children.
    #[serde(default)]
    pub action: Action,
}

impl Directive {
    /// Creates a directive with the default [`Action::Replace`].
    pub fn new(selector: impl Into<String>, insert: impl Into<NodeInput>) -> Self {
        Self {
            selector: selector.into(),
            insert: insert.into(),
            action: Action::default(),
        }
    }

    /// Sets a non-default action.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_action_is_replace() {
        assert_eq!(Action::default(), Action::Replace);
        let directive = Directive::new("#alpha", "text");
        assert_eq!(directive.action, Action::Replace);
    }

    #[test]
    fn test_node_input_from_conversions() {
        assert_eq!(NodeInput::from("x"), NodeInput::Text("x".to_string()));
        assert_eq!(
            NodeInput::from(Node::new("p")),
            NodeInput::Single(Node::new("p"))
        );
        assert_eq!(
            NodeInput::from(vec![Node::new("p")]),
            NodeInput::Many(vec![Node::new("p")])
        );
    }

    #[test]
    fn test_text_input_renders_escaped() {
        let input = NodeInput::from("a & b");
        assert_eq!(input.to_html().unwrap(), "a &amp; b");
    }

    #[test]
    fn test_many_input_renders_in_given_order() {
        let input = NodeInput::from(vec![
            Node::new("p").attr("class", "c").text("charlie"),
            Node::new("p").attr("class", "d").text("delta"),
        ]);
        assert_eq!(
            input.to_html().unwrap(),
            r#"<p class="c">charlie</p><p class="d">delta</p>"#
        );
    }

    #[test]
    fn test_empty_many_input_renders_nothing() {
        let input = NodeInput::Many(Vec::new());
        assert_eq!(input.to_html().unwrap(), "");
    }

    #[test]
    fn test_deserialize_directive_with_explicit_action() {
        let directive: Directive = serde_json::from_str(
            r##"{ "selector": "#alpha", "insert": "hello", "action": "prepend" }"##,
        )
        .unwrap();
        assert_eq!(directive.selector, "#alpha");
        assert_eq!(directive.insert, NodeInput::Text("hello".to_string()));
        assert_eq!(directive.action, Action::Prepend);
    }

    #[test]
    fn test_deserialize_directive_action_defaults_to_replace() {
        let directive: Directive =
            serde_json::from_str(r#"{ "selector": ".a", "insert": "apple" }"#).unwrap();
        assert_eq!(directive.action, Action::Replace);
    }

    #[test]
    fn test_deserialize_unknown_action_is_rejected() {
        let result: std::result::Result<Directive, _> = serde_json::from_str(
            r#"{ "selector": ".a", "insert": "apple", "action": "splice" }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_insert_variants() {
        let single: Directive = serde_json::from_str(
            r#"{ "selector": "p", "insert": { "tag": "em", "children": ["hi"] } }"#,
        )
        .unwrap();
        assert!(matches!(single.insert, NodeInput::Single(_)));

        let many: Directive = serde_json::from_str(
            r#"{ "selector": "p", "insert": [ { "tag": "em" }, { "tag": "strong" } ] }"#,
        )
        .unwrap();
        assert!(matches!(many.insert, NodeInput::Many(ref nodes) if nodes.len() == 2));
    }
}
