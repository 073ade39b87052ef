//! Mosaic rich-text renderer
//!
//! Renders the CMS editor's tree-shaped document model
//! ([`mosaic_sdk::RichTextNode`]) into HTML with a fixed rule set: headings
//! to level 6, nested bullet/ordered/task lists, code blocks, images, text
//! alignment, the inline mark set, and links. Output is read-only markup
//! with stable `tiptap-*` class hooks; styling stays the host's concern.
//!
//! Unlike the API client, this boundary does not degrade: a serialized
//! document that fails to parse is a caller bug and
//! [`render_document_str`] fails hard.

use miette::Diagnostic;

pub mod html;

pub use html::{push_html, render_document, render_document_str, write_html};

/// Errors raised at the rendering boundary.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum RenderError {
    /// The serialized document is not valid JSON for the document model.
    #[error("malformed rich-text document: {0}")]
    #[diagnostic(
        code(mosaic::renderer::parse),
        help("the content string must be the editor's serialized document tree")
    )]
    Parse(#[from] serde_json::Error),
}
