//! The post card component.

use mosaic_sdk::config::MosaicConfig;
use mosaic_sdk::urls::post_url;

use crate::types::BlogPost;
use crate::util;

/// Render one post as a linked card.
///
/// When a configuration is supplied the link follows its post route
/// pattern; without one the legacy `/blog/post/{slug}` path is kept for
/// hosts predating configurable routes.
pub fn post_card(post: &BlogPost, config: Option<&MosaicConfig>, class_name: Option<&str>) -> String {
    let url = match config {
        Some(config) => post_url(config, &post.slug),
        None => format!("/blog/post/{}", post.slug),
    };

    let mut html = String::new();
    match class_name {
        Some(extra) => html.push_str(&format!(
            "<article class=\"mosaic-post-card {}\">",
            util::attr(extra)
        )),
        None => html.push_str("<article class=\"mosaic-post-card\">"),
    }
    html.push_str(&format!(
        "<a class=\"mosaic-post-card-link\" href=\"{}\">",
        util::href(&url)
    ));

    if let Some(image) = &post.featured_image {
        html.push_str(&format!(
            "<div class=\"mosaic-post-card-media\"><img src=\"{}\" alt=\"{}\" /></div>",
            util::href(image),
            util::attr(&post.title)
        ));
    }

    html.push_str("<header class=\"mosaic-post-card-header\">");
    if let Some(label) = post.label_list().first() {
        html.push_str(&format!(
            "<span class=\"mosaic-post-card-label\">{}</span>",
            util::text(label)
        ));
    }
    html.push_str(&format!(
        "<h3 class=\"mosaic-post-card-title\">{}</h3>",
        util::text(&post.title)
    ));
    html.push_str("</header>");

    if let Some(excerpt) = &post.excerpt {
        html.push_str(&format!(
            "<p class=\"mosaic-post-card-excerpt\">{}</p>",
            util::text(excerpt)
        ));
    }

    html.push_str("<footer class=\"mosaic-post-card-footer\">");
    if let Some(published) = &post.published_at {
        html.push_str(&format!(
            "<time datetime=\"{}\">{}</time>",
            published.to_rfc3339(),
            published.format("%b %-d, %Y")
        ));
        html.push_str("<span class=\"mosaic-post-card-read-time\">5 min read</span>");
    }
    html.push_str("</footer></a></article>");
    html
}
