//! Client SDK for the Mosaic hosted CMS.
//!
//! Wraps the Mosaic content API (list posts, fetch a post, register a
//! destination route) behind a small, total-by-contract client: read
//! operations never raise, they log and degrade to empty results so a
//! failed fetch can never abort a page render.
//!
//! Hosts configure the SDK once per execution context through a
//! [`registry::MosaicRegistry`] owned by their composition root, then hand
//! the resulting [`registry::MosaicHandle`] to whatever needs API access.

pub mod autoroute;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod store;
pub mod types;
pub mod urls;

pub use client::{ListPostsParams, MosaicClient, RegisterDestination, RegisterOutcome};
pub use config::{
    MosaicConfig, PartialConfig, PartialSiteInfo, RouteDefinition, RouteKind, SiteInfo,
};
pub use error::MosaicError;
pub use registry::{MosaicHandle, MosaicRegistry};
pub use types::{Pagination, Post, PostEnvelope, PostList, RichTextMark, RichTextNode};
