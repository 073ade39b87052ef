//! Small escaping helpers over the renderer's sink-based escapes.

use pulldown_cmark_escape::{escape_href, escape_html, escape_html_body_text};

/// Escape body text for element content.
pub(crate) fn text(s: &str) -> String {
    let mut out = String::new();
    // Writing to a String is infallible.
    escape_html_body_text(&mut out, s).unwrap();
    out
}

/// Escape a string for an attribute value.
pub(crate) fn attr(s: &str) -> String {
    let mut out = String::new();
    escape_html(&mut out, s).unwrap();
    out
}

/// Escape a URL for an href/src attribute.
pub(crate) fn href(s: &str) -> String {
    let mut out = String::new();
    escape_href(&mut out, s).unwrap();
    out
}
