//! The post list component.

use mosaic_sdk::config::MosaicConfig;

use crate::card::post_card;
use crate::types::BlogPost;
use crate::util;

/// Render a grid of post cards, or the error/empty state.
pub fn post_list(posts: Option<&[BlogPost]>, error: Option<&str>) -> String {
    post_list_with_config(posts, error, None)
}

/// Like [`post_list`], with a configuration for card link generation.
pub fn post_list_with_config(
    posts: Option<&[BlogPost]>,
    error: Option<&str>,
    config: Option<&MosaicConfig>,
) -> String {
    if let Some(error) = error {
        return format!(
            "<div class=\"mosaic-post-list-error\"><p>Error loading posts: {}</p></div>",
            util::text(error)
        );
    }

    match posts {
        Some(posts) if !posts.is_empty() => {
            let mut html = String::from("<div class=\"mosaic-post-grid\">");
            for post in posts {
                html.push_str(&post_card(post, config, None));
            }
            html.push_str("</div>");
            html
        }
        _ => String::from(
            "<div class=\"mosaic-post-list-empty\"><p>No posts found for this category</p></div>",
        ),
    }
}
