//! DOM operations adapter.
//!
//! The single boundary where this crate touches `dom_query`. Parsing,
//! selector evaluation, serialization, and the three child-list mutations all
//! go through here; the rest of the crate never imports `dom_query` directly.

// Re-export core types so callers can pre-parse and hold their own trees.
pub use dom_query::{Document, Matcher, Selection};

// Re-export StrTendril for zero-copy text returns.
pub use tendril::StrTendril;

use crate::error::{Error, Result};

/// Parse an HTML fragment into a document.
///
/// The input is parsed with full-document rules, so fragment markup lands in
/// an implicit `<body>`; [`serialize`] is the inverse.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialize a document back to fragment markup.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn serialize(doc: &Document) -> StrTendril {
    doc.select("body").inner_html()
}

/// Compile a CSS selector.
///
/// Fails with [`Error::Selector`] on invalid or unsupported syntax.
pub fn compile_selector(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|e| Error::Selector(format!("{selector:?}: {e:?}")))
}

/// Select every element in the document matching a compiled selector.
#[inline]
#[must_use]
pub fn select_all<'a>(doc: &'a Document, matcher: &Matcher) -> Selection<'a> {
    doc.select_matcher(matcher)
}

/// Insert a fragment before the existing children of each selected element.
#[inline]
pub fn prepend_children(sel: &Selection, html: &str) {
    sel.prepend_html(html);
}

/// Insert a fragment after the existing children of each selected element.
#[inline]
pub fn append_children(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Discard the existing children of each selected element and set the
/// fragment as the sole content.
#[inline]
pub fn replace_children(sel: &Selection, html: &str) {
    sel.set_html(html);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize_round_trip() {
        let html = r#"<div id="alpha"><p class="a">alpha</p><p class="b">bravo</p></div>"#;
        let doc = parse(html);
        assert_eq!(serialize(&doc).as_ref(), html);
    }

    #[test]
    fn test_compile_selector_accepts_valid_syntax() {
        assert!(compile_selector("#alpha .a").is_ok());
        assert!(compile_selector("div > p:nth-child(2)").is_ok());
    }

    #[test]
    fn test_compile_selector_rejects_invalid_syntax() {
        let err = compile_selector("###").unwrap_err();
        assert!(matches!(err, Error::Selector(_)));
        assert!(err.to_string().contains("###"));

        assert!(compile_selector("").is_err());
    }

    #[test]
    fn test_select_all_matches_every_element() {
        let doc = parse("<div><p>1</p><p>2</p><span>3</span></div>");
        let matcher = compile_selector("p").unwrap();
        assert_eq!(select_all(&doc, &matcher).length(), 2);
    }

    #[test]
    fn test_prepend_children_keeps_existing_content_after() {
        let doc = parse("<div><p>old</p></div>");
        prepend_children(&doc.select("div"), "<p>new</p>");
        assert_eq!(serialize(&doc).as_ref(), "<div><p>new</p><p>old</p></div>");
    }

    #[test]
    fn test_append_children_keeps_existing_content_before() {
        let doc = parse("<div><p>old</p></div>");
        append_children(&doc.select("div"), "<p>new</p>");
        assert_eq!(serialize(&doc).as_ref(), "<div><p>old</p><p>new</p></div>");
    }

    #[test]
    fn test_replace_children_discards_existing_content() {
        let doc = parse("<div><p>old</p><p>older</p></div>");
        replace_children(&doc.select("div"), "<p>new</p>");
        assert_eq!(serialize(&doc).as_ref(), "<div><p>new</p></div>");
    }

    #[test]
    fn test_mutations_on_empty_selection_are_no_ops() {
        let doc = parse("<div><p>old</p></div>");
        let empty = doc.select("span");
        prepend_children(&empty, "<p>x</p>");
        append_children(&empty, "<p>x</p>");
        replace_children(&empty, "<p>x</p>");
        assert_eq!(serialize(&doc).as_ref(), "<div><p>old</p></div>");
    }
}
