//! Route URL construction.
//!
//! Builds concrete site URLs from the configured route patterns (or the
//! built-in defaults) by substituting `:name` tokens. Substitution replaces
//! only the first occurrence of each token; a pattern repeating a token
//! with a single supplied parameter keeps the later occurrences verbatim.
//! That quirk is part of the documented contract and deliberately kept.

use crate::config::{MosaicConfig, RouteKind};

pub const DEFAULT_LIST_PATTERN: &str = "/blog";
pub const DEFAULT_POST_PATTERN: &str = "/blog/:slug";
pub const DEFAULT_CATEGORY_PATTERN: &str = "/blog/category/:category";

/// The built-in pattern used when no route of the given kind is configured.
pub fn default_pattern(kind: RouteKind) -> &'static str {
    match kind {
        RouteKind::List => DEFAULT_LIST_PATTERN,
        RouteKind::Post => DEFAULT_POST_PATTERN,
        RouteKind::Category => DEFAULT_CATEGORY_PATTERN,
    }
}

/// Resolve a URL for `kind`, substituting `params` into the pattern.
///
/// The first configured route matching the kind wins; duplicates are
/// tolerated but never consulted. Unmatched tokens are left verbatim —
/// resolution never fails.
pub fn resolve_route_url(
    config: &MosaicConfig,
    kind: RouteKind,
    params: &[(&str, &str)],
) -> String {
    let pattern = config
        .routes
        .iter()
        .find(|route| route.kind == kind)
        .map(|route| route.path_pattern.as_str())
        .unwrap_or_else(|| default_pattern(kind));

    let mut url = pattern.to_owned();
    for (name, value) in params {
        url = url.replacen(&format!(":{name}"), value, 1);
    }
    url
}

/// URL of a single post.
pub fn post_url(config: &MosaicConfig, slug: &str) -> String {
    resolve_route_url(config, RouteKind::Post, &[("slug", slug)])
}

/// URL of the post list page.
pub fn list_url(config: &MosaicConfig) -> String {
    resolve_route_url(config, RouteKind::List, &[])
}

/// URL of a category page.
pub fn category_url(config: &MosaicConfig, category: &str) -> String {
    resolve_route_url(config, RouteKind::Category, &[("category", category)])
}

/// Whether a host-framework path contains dynamic `[param]` segments.
pub fn is_dynamic_route(path: &str) -> bool {
    path.contains('[') && path.contains(']')
}

/// Parameter names of a dynamic route, e.g. `/blog/[slug]` → `["slug"]`.
pub fn extract_route_params(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| segment.starts_with('[') && segment.ends_with(']'))
        .map(|segment| segment[1..segment.len() - 1].to_owned())
        .collect()
}
