//! The insertion-directive processor.
//!
//! A single stateless pass: for each directive, in list order, resolve the
//! selector against the current tree state and mutate every matched element.
//! Sequential processing is semantic, not incidental — an element inserted by
//! one directive can be matched by the next one's selector.

use crate::directive::{Action, Directive};
use crate::dom::{self, Document};
use crate::error::Result;

/// Applies a directive list to a document, mutating it in place.
///
/// An unmatched selector is a silent no-op for that directive. An invalid
/// selector or insert value aborts the pass immediately; earlier directives
/// are not rolled back.
pub fn apply(doc: &Document, directives: &[Directive]) -> Result<()> {
    for directive in directives {
        apply_one(doc, directive)?;
    }
    Ok(())
}

fn apply_one(doc: &Document, directive: &Directive) -> Result<()> {
    let matcher = dom::compile_selector(&directive.selector)?;
    let matched = dom::select_all(doc, &matcher);
    if !matched.exists() {
        return Ok(());
    }

    let html = directive.insert.to_html()?;
    match directive.action {
        Action::Prepend => dom::prepend_children(&matched, &html),
        Action::Append => dom::append_children(&matched, &html),
        Action::Replace => dom::replace_children(&matched, &html),
    }
    Ok(())
}
