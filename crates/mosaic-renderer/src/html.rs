//! HTML writing for the document tree.
//!
//! Recursive descent over the owned tree through an [`HtmlWriter`]
//! targeting any [`StrWrite`] sink. Body text, attribute values, and hrefs
//! are escaped; unknown node kinds contribute their children without a
//! wrapper and unknown marks are ignored, so documents from newer editors
//! degrade to plain content instead of breaking the page.

use mosaic_sdk::types::{RichTextMark, RichTextNode};
use pulldown_cmark_escape::{StrWrite, escape_href, escape_html, escape_html_body_text};

use crate::RenderError;

/// Alignments accepted from the `textAlign` attribute. Anything else is
/// dropped rather than interpolated into a style attribute.
const TEXT_ALIGNMENTS: [&str; 4] = ["left", "center", "right", "justify"];

struct HtmlWriter<W> {
    /// Writer to write to.
    writer: W,

    /// Whether or not the last write wrote a newline.
    end_newline: bool,
}

impl<W: StrWrite> HtmlWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            writer,
            end_newline: true,
        }
    }

    /// Writes a buffer, and tracks whether or not a newline was written.
    #[inline]
    fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;
        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
        }
        Ok(())
    }

    fn run(&mut self, doc: &RichTextNode) -> Result<(), W::Error> {
        self.node(doc)
    }

    fn children(&mut self, node: &RichTextNode) -> Result<(), W::Error> {
        for child in &node.content {
            self.node(child)?;
        }
        Ok(())
    }

    fn node(&mut self, node: &RichTextNode) -> Result<(), W::Error> {
        match node.kind.as_str() {
            "doc" => self.children(node),
            "paragraph" => {
                if !self.end_newline {
                    self.write("\n")?;
                }
                self.write("<p")?;
                self.align_attr(node)?;
                self.write(">")?;
                self.children(node)?;
                self.write("</p>\n")
            }
            "heading" => {
                let level = node.attr_i64("level").unwrap_or(1).clamp(1, 6);
                if !self.end_newline {
                    self.write("\n")?;
                }
                write!(&mut self.writer, "<h{}", level)?;
                self.align_attr(node)?;
                self.write(">")?;
                self.children(node)?;
                write!(&mut self.writer, "</h{}>\n", level)?;
                self.end_newline = true;
                Ok(())
            }
            "text" => self.text(node),
            "bulletList" => {
                self.write("<ul class=\"tiptap-bullet-list\">\n")?;
                self.children(node)?;
                self.write("</ul>\n")
            }
            "orderedList" => {
                match node.attr_i64("start") {
                    Some(start) if start != 1 => {
                        write!(&mut self.writer, "<ol class=\"tiptap-ordered-list\" start=\"{}\">\n", start)?;
                        self.end_newline = true;
                    }
                    _ => self.write("<ol class=\"tiptap-ordered-list\">\n")?,
                }
                self.children(node)?;
                self.write("</ol>\n")
            }
            "listItem" => {
                self.write("<li class=\"tiptap-list-item\">")?;
                self.children(node)?;
                self.write("</li>\n")
            }
            "taskList" => {
                self.write("<ul class=\"tiptap-task-list\" data-type=\"taskList\">\n")?;
                self.children(node)?;
                self.write("</ul>\n")
            }
            "taskItem" => {
                let checked = node.attr_bool("checked").unwrap_or(false);
                self.write("<li class=\"tiptap-task-item\">")?;
                if checked {
                    self.write("<input disabled=\"\" type=\"checkbox\" checked=\"\"/>")?;
                } else {
                    self.write("<input disabled=\"\" type=\"checkbox\"/>")?;
                }
                self.children(node)?;
                self.write("</li>\n")
            }
            "codeBlock" => {
                if !self.end_newline {
                    self.write("\n")?;
                }
                match node.attr_str("language").filter(|lang| !lang.is_empty()) {
                    Some(lang) => {
                        self.write("<pre><code class=\"language-")?;
                        escape_html(&mut self.writer, lang)?;
                        self.write("\">")?;
                    }
                    None => self.write("<pre><code>")?,
                }
                // Code block children are plain text leaves; marks do not
                // apply inside.
                for child in &node.content {
                    if let Some(text) = &child.text {
                        escape_html_body_text(&mut self.writer, text)?;
                    }
                }
                self.write("</code></pre>\n")
            }
            "blockquote" => {
                if !self.end_newline {
                    self.write("\n")?;
                }
                self.write("<blockquote>\n")?;
                self.children(node)?;
                self.write("</blockquote>\n")
            }
            "horizontalRule" => {
                if self.end_newline {
                    self.write("<hr />\n")
                } else {
                    self.write("\n<hr />\n")
                }
            }
            "hardBreak" => self.write("<br />\n"),
            "image" => self.image(node),
            // Unknown kinds: render the children, skip the wrapper.
            _ => self.children(node),
        }
    }

    /// Optional `style="text-align: …"` from the node's attrs.
    fn align_attr(&mut self, node: &RichTextNode) -> Result<(), W::Error> {
        if let Some(align) = node.attr_str("textAlign") {
            if TEXT_ALIGNMENTS.contains(&align) {
                write!(&mut self.writer, " style=\"text-align: {}\"", align)?;
            }
        }
        Ok(())
    }

    /// A text leaf: open its marks in order, escape the text, close in
    /// reverse order.
    fn text(&mut self, node: &RichTextNode) -> Result<(), W::Error> {
        let mut closers: Vec<&'static str> = Vec::new();
        for mark in &node.marks {
            if let Some(closer) = self.mark_open(mark)? {
                closers.push(closer);
            }
        }
        if let Some(text) = &node.text {
            escape_html_body_text(&mut self.writer, text)?;
            self.end_newline = text.ends_with('\n');
        }
        for closer in closers.into_iter().rev() {
            self.write(closer)?;
        }
        Ok(())
    }

    /// Writes a mark's opening tag and returns the matching closer, or
    /// `None` for unknown marks.
    fn mark_open(&mut self, mark: &RichTextMark) -> Result<Option<&'static str>, W::Error> {
        let closer = match mark.kind.as_str() {
            "bold" => {
                self.write("<strong>")?;
                "</strong>"
            }
            "italic" => {
                self.write("<em>")?;
                "</em>"
            }
            "underline" => {
                self.write("<u>")?;
                "</u>"
            }
            "strike" => {
                self.write("<s>")?;
                "</s>"
            }
            "code" => {
                self.write("<code class=\"tiptap-code\">")?;
                "</code>"
            }
            "highlight" => {
                match mark.attr_str("color") {
                    Some(color) => {
                        self.write("<mark style=\"background-color: ")?;
                        escape_html(&mut self.writer, color)?;
                        self.write("\">")?;
                    }
                    None => self.write("<mark>")?,
                }
                "</mark>"
            }
            "subscript" => {
                self.write("<sub>")?;
                "</sub>"
            }
            "superscript" => {
                self.write("<sup>")?;
                "</sup>"
            }
            "link" => {
                self.write("<a href=\"")?;
                escape_href(&mut self.writer, mark.attr_str("href").unwrap_or(""))?;
                self.write("\"")?;
                if let Some(target) = mark.attr_str("target") {
                    self.write(" target=\"")?;
                    escape_html(&mut self.writer, target)?;
                    self.write("\"")?;
                }
                self.write(" rel=\"noopener noreferrer\">")?;
                "</a>"
            }
            _ => return Ok(None),
        };
        Ok(Some(closer))
    }

    fn image(&mut self, node: &RichTextNode) -> Result<(), W::Error> {
        self.write("<img class=\"tiptap-image\" src=\"")?;
        escape_href(&mut self.writer, node.attr_str("src").unwrap_or(""))?;
        self.write("\"")?;
        if let Some(alt) = node.attr_str("alt") {
            self.write(" alt=\"")?;
            escape_html(&mut self.writer, alt)?;
            self.write("\"")?;
        }
        if let Some(title) = node.attr_str("title") {
            self.write(" title=\"")?;
            escape_html(&mut self.writer, title)?;
            self.write("\"")?;
        }
        // Resized images carry explicit dimensions from the editor.
        if let Some(width) = node.attr_i64("width") {
            write!(&mut self.writer, " width=\"{}\"", width)?;
        }
        if let Some(height) = node.attr_i64("height") {
            write!(&mut self.writer, " height=\"{}\"", height)?;
        }
        self.write(" />")
    }
}

/// Write a document as HTML into any [`StrWrite`] sink.
pub fn write_html<W: StrWrite>(writer: W, doc: &RichTextNode) -> Result<(), W::Error> {
    HtmlWriter::new(writer).run(doc)
}

/// Append a document's HTML to a `String`.
pub fn push_html(output: &mut String, doc: &RichTextNode) {
    // Writing to a String is infallible.
    write_html(output, doc).unwrap()
}

/// Render a document tree to an HTML string. Pure: re-rendering the same
/// tree always produces the same markup, so there is no stale state to
/// clear between inputs.
pub fn render_document(doc: &RichTextNode) -> String {
    let mut output = String::new();
    push_html(&mut output, doc);
    output
}

/// Parse a serialized document and render it.
///
/// Malformed input is a hard error; this boundary does not degrade.
pub fn render_document_str(raw: &str) -> Result<String, RenderError> {
    let doc: RichTextNode = serde_json::from_str(raw)?;
    Ok(render_document(&doc))
}
