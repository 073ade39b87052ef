//! Presentational HTML components for Mosaic content.
//!
//! Server-render friendly building blocks over the SDK's data model: a
//! post card, a post list, a prose content wrapper and a variant-styled
//! card container. Each component is a pure function from data to an HTML
//! string carrying stable `mosaic-*` class hooks; all user-supplied text
//! and URLs are escaped. Styling is the host's concern.

pub mod card;
pub mod container;
pub mod list;
pub mod types;

mod util;

pub use card::post_card;
pub use container::{
    CardSize, CardVariant, CardWidth, ContentCardProps, PageContainerProps, ProseSize, Spacing,
    blog_content, blog_content_node, content_card, page_container,
};
pub use list::post_list;
pub use types::BlogPost;
