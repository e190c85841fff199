//! Configuration options for insertion transforms.
//!
//! The `Options` struct holds the ordered directive list driving a transform.
//! Use `Default::default()` for the empty, no-op configuration.

use serde::Deserialize;

use crate::directive::Directive;
use crate::error::Result;

/// Configuration for an insertion transform.
///
/// The only recognized option is `insertions`; unknown keys in deserialized
/// configuration are ignored.
///
/// # Example
///
/// ```rust
/// use html_insert::{Action, Directive, Node, Options};
///
/// // Empty options make the transform a no-op
/// let options = Options::default();
/// assert!(options.insertions.is_empty());
///
/// // Or build the directive list in code
/// let options = Options {
///     insertions: vec![
///         Directive::new("#title", "A Tale of Two Cities"),
///         Directive::new(".content", Node::new("p").text("It was the worst of times."))
///             .with_action(Action::Append),
///     ],
/// };
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Options {
    /// Ordered directive list, applied first to last.
    ///
    /// Default: empty (no-op transform)
    #[serde(default)]
    pub insertions: Vec<Directive>,
}

impl Options {
    /// Loads options from a JSON document.
    ///
    /// `action` accepts the lowercase strings `prepend`, `append`, and
    /// `replace` and defaults to `replace` when absent; `insert` accepts a
    /// string, a node object, or an array of node objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
