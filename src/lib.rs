//! # html-insert
//!
//! Declarative, selector-driven insertions into HTML trees.
//!
//! This library applies an ordered list of insertion directives to an HTML
//! tree: each directive names a CSS selector, the content to insert (raw
//! text, one element, or a list of elements), and an action — prepend the
//! content before the matched elements' children, append it after them, or
//! replace the children outright (the default). HTML parsing, selector
//! matching, and serialization are delegated to `dom_query`.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_insert::{transform, Action, Directive, Node, Options};
//!
//! let html = r#"<div id="alpha"><p class="a">alpha</p><p class="b">bravo</p></div>"#;
//!
//! let options = Options {
//!     insertions: vec![
//!         Directive::new("#alpha", Node::new("p").text("zamboni"))
//!             .with_action(Action::Prepend),
//!     ],
//! };
//!
//! let out = transform(html, &options)?;
//! assert_eq!(
//!     out,
//!     r#"<div id="alpha"><p>zamboni</p><p class="a">alpha</p><p class="b">bravo</p></div>"#
//! );
//! # Ok::<(), html_insert::Error>(())
//! ```
//!
//! ## Semantics
//!
//! - Directives are applied strictly in list order; a later directive sees
//!   the tree as left by earlier ones.
//! - A selector mutates **every** matching element.
//! - An unmatched selector is a silent no-op, not an error.
//! - An invalid selector or insert value aborts the whole pass; earlier
//!   directives are not rolled back.
//!
//! Callers that own a parsed tree can skip the string pipeline and use
//! [`apply`] directly on a [`dom::Document`].

mod apply;
mod directive;
mod error;
mod node;
mod options;

/// DOM operations adapter over `dom_query` (parse, select, mutate, serialize).
pub mod dom;

// Public API - re-exports
pub use apply::apply;
pub use directive::{Action, Directive, NodeInput};
pub use error::{Error, Result};
pub use node::{Node, NodeChild};
pub use options::Options;

/// Applies the configured insertions to an HTML fragment and returns the
/// mutated markup.
///
/// The input is treated as fragment markup: it is parsed into an implicit
/// document, mutated in place, and serialized back without `<html>`/`<body>`
/// wrappers. Empty options return the input unchanged apart from the
/// parser's normalization.
///
/// # Example
///
/// ```rust
/// use html_insert::{transform, Directive, Options};
///
/// let options = Options {
///     insertions: vec![Directive::new("#title", "A Tale of Two Cities")],
/// };
/// let out = transform(r#"<h1 id="title">Untitled</h1>"#, &options)?;
/// assert_eq!(out, r#"<h1 id="title">A Tale of Two Cities</h1>"#);
/// # Ok::<(), html_insert::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn transform(html: &str, options: &Options) -> Result<String> {
    let doc = dom::parse(html);
    apply(&doc, &options.insertions)?;
    Ok(dom::serialize(&doc).to_string())
}
