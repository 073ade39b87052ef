//! Content containers: the variant-styled card and the prose page wrapper.

use mosaic_renderer::{RenderError, render_document, render_document_str};
use mosaic_sdk::types::RichTextNode;

use crate::util;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Subtle,
    Outline,
    Elevated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardWidth {
    Auto,
    #[default]
    Full,
    Content,
}

/// Props for [`content_card`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCardProps {
    pub size: CardSize,
    pub variant: CardVariant,
    pub width: CardWidth,
    /// Center the card in its parent.
    pub container: bool,
    pub class_name: Option<String>,
}

impl CardSize {
    fn class(self) -> &'static str {
        match self {
            CardSize::Sm => "mosaic-card-sm",
            CardSize::Md => "mosaic-card-md",
            CardSize::Lg => "mosaic-card-lg",
        }
    }
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "mosaic-card-default",
            CardVariant::Subtle => "mosaic-card-subtle",
            CardVariant::Outline => "mosaic-card-outline",
            CardVariant::Elevated => "mosaic-card-elevated",
        }
    }
}

impl CardWidth {
    fn class(self) -> &'static str {
        match self {
            CardWidth::Auto => "mosaic-card-auto",
            CardWidth::Full => "mosaic-card-full",
            CardWidth::Content => "mosaic-card-content",
        }
    }
}

/// Wrap already-rendered HTML in the variant-styled card container.
///
/// `inner_html` is trusted markup (typically another component's output);
/// it is not escaped.
pub fn content_card(props: &ContentCardProps, inner_html: &str) -> String {
    let mut classes = vec![
        "mosaic-card",
        props.size.class(),
        props.width.class(),
        props.variant.class(),
    ];
    if props.container {
        classes.push("mosaic-card-centered");
    }
    let mut class_attr = classes.join(" ");
    if let Some(extra) = &props.class_name {
        class_attr.push(' ');
        class_attr.push_str(&util::attr(extra));
    }
    format!("<div class=\"{class_attr}\">{inner_html}</div>")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProseSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

impl ProseSize {
    fn class(self) -> &'static str {
        match self {
            ProseSize::Sm => "mosaic-prose-sm",
            ProseSize::Md => "mosaic-prose-md",
            ProseSize::Lg => "mosaic-prose-lg",
        }
    }
}

impl Spacing {
    fn class(self) -> &'static str {
        match self {
            Spacing::Compact => "mosaic-prose-compact",
            Spacing::Normal => "mosaic-prose-normal",
            Spacing::Relaxed => "mosaic-prose-relaxed",
        }
    }
}

/// Props for [`page_container`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContainerProps {
    pub card: ContentCardProps,
    pub size: ProseSize,
    pub spacing: Spacing,
}

/// Render a serialized document inside a prose-styled card container.
///
/// Parse failure of the serialized document is a hard error, same contract
/// as the renderer itself.
pub fn page_container(props: &PageContainerProps, content: &str) -> Result<String, RenderError> {
    let rendered = render_document_str(content)?;
    let prose = format!(
        "<div class=\"mosaic-prose {} {}\">{rendered}</div>",
        props.size.class(),
        props.spacing.class()
    );
    Ok(content_card(&props.card, &prose))
}

/// Render a serialized document wrapped in the default prose container.
pub fn blog_content(content: &str) -> Result<String, RenderError> {
    let rendered = render_document_str(content)?;
    Ok(format!("<div class=\"mosaic-prose\">{rendered}</div>"))
}

/// [`blog_content`] for an already-parsed document tree. Infallible.
pub fn blog_content_node(doc: &RichTextNode) -> String {
    format!("<div class=\"mosaic-prose\">{}</div>", render_document(doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#;

    #[test]
    fn blog_content_parses_and_wraps() {
        let html = blog_content(DOC).unwrap();
        assert!(html.starts_with("<div class=\"mosaic-prose\">"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn blog_content_rejects_malformed_input() {
        assert!(matches!(
            blog_content("{ nope").unwrap_err(),
            RenderError::Parse(_)
        ));
    }

    #[test]
    fn content_card_default_classes() {
        let html = content_card(&ContentCardProps::default(), "<p>x</p>");
        assert!(html.contains("mosaic-card "));
        assert!(html.contains("mosaic-card-md"));
        assert!(html.contains("mosaic-card-full"));
        assert!(html.contains("mosaic-card-default"));
        assert!(!html.contains("mosaic-card-centered"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn page_container_nests_prose_in_card() {
        let props = PageContainerProps {
            card: ContentCardProps {
                variant: CardVariant::Elevated,
                container: true,
                ..Default::default()
            },
            size: ProseSize::Lg,
            spacing: Spacing::Relaxed,
        };
        let html = page_container(&props, DOC).unwrap();
        assert!(html.contains("mosaic-card-elevated"));
        assert!(html.contains("mosaic-card-centered"));
        assert!(html.contains("mosaic-prose-lg"));
        assert!(html.contains("mosaic-prose-relaxed"));
        assert!(html.contains("<p>hi</p>"));
    }
}
