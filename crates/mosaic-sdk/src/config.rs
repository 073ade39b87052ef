//! Configuration building and defaulting.
//!
//! Hosts hand the SDK a [`PartialConfig`] (any subset of the fields,
//! typically sourced from their own environment) and the builder normalizes
//! it into a complete, immutable [`MosaicConfig`]. Defaulting is pure and
//! deep: each `site` field falls back independently, so omitting the whole
//! `site` block still yields a fully populated one.

use serde::{Deserialize, Serialize};

use crate::error::MosaicError;

/// Placeholder site name used when none is configured.
pub const DEFAULT_SITE_NAME: &str = "Mosaic Site";

/// Default content path used when none is configured.
pub const DEFAULT_BLOG_PATH: &str = "/blog";

/// Complete SDK configuration.
///
/// Built once per execution context and immutable thereafter; a new
/// `configure` call on the registry fully replaces it, never merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicConfig {
    /// Base URL for the Mosaic API, e.g. `https://your-instance.com/api/v1`.
    /// Trailing slashes are stripped during build.
    pub api_base_url: String,
    /// API key gating authenticated operations. Empty keys are normalized
    /// to `None`.
    pub api_key: Option<String>,
    /// Site information, fully populated after defaulting.
    pub site: SiteInfo,
    /// Explicitly defined routes. Order is preserved; the URL resolver only
    /// ever consults the first definition of each kind.
    pub routes: Vec<RouteDefinition>,
    /// Whether first-visit paths should be auto-registered as destinations.
    pub auto_detect_routes: bool,
}

/// Site identity attached to API calls and destination registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    /// Origin of the hosting site, e.g. `https://example.com`. Empty when
    /// neither the host nor the ambient context supplied one.
    pub domain: String,
    pub default_path: String,
}

/// The kind of content a route displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    List,
    Post,
    Category,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::List => "list",
            RouteKind::Post => "post",
            RouteKind::Category => "category",
        }
    }
}

/// A route definition mapping a path pattern on the hosting site to a
/// content kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Path pattern with `:name` tokens, e.g. `/blog/:slug`.
    #[serde(rename = "path")]
    pub path_pattern: String,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    /// Optional display name reported to the CMS.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Any subset of [`MosaicConfig`], as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub site: Option<PartialSiteInfo>,
    #[serde(default)]
    pub routes: Option<Vec<RouteDefinition>>,
    #[serde(default)]
    pub auto_detect_routes: Option<bool>,
}

impl PartialConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}

/// Any subset of [`SiteInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSiteInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub default_path: Option<String>,
}

impl MosaicConfig {
    /// Normalize a partial configuration into a complete one.
    ///
    /// Pure and total. Defaulting order per field: explicit value, then
    /// ambient origin (domain only, see [`build_with_origin`]), then the
    /// computed default. Empty strings count as absent.
    ///
    /// [`build_with_origin`]: Self::build_with_origin
    pub fn build(partial: PartialConfig) -> Self {
        Self::build_with_origin(partial, None)
    }

    /// Like [`build`](Self::build), with an ambient origin for interactive
    /// hosts that know the address they are being served from. It only
    /// backs the `site.domain` default; an explicit domain always wins.
    pub fn build_with_origin(partial: PartialConfig, origin: Option<&str>) -> Self {
        let site = partial.site.unwrap_or_default();
        Self {
            api_base_url: partial.api_base_url.trim_end_matches('/').to_owned(),
            api_key: partial.api_key.filter(|key| !key.is_empty()),
            site: SiteInfo {
                name: site
                    .name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
                domain: site
                    .domain
                    .filter(|domain| !domain.is_empty())
                    .or_else(|| origin.map(str::to_owned))
                    .unwrap_or_default(),
                default_path: site
                    .default_path
                    .filter(|path| !path.is_empty())
                    .unwrap_or_else(|| DEFAULT_BLOG_PATH.to_owned()),
            },
            routes: partial.routes.unwrap_or_default(),
            auto_detect_routes: partial.auto_detect_routes.unwrap_or(true),
        }
    }

    /// Project a built configuration back into partial form.
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            api_base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
            site: Some(PartialSiteInfo {
                name: Some(self.site.name.clone()),
                domain: Some(self.site.domain.clone()),
                default_path: Some(self.site.default_path.clone()),
            }),
            routes: Some(self.routes.clone()),
            auto_detect_routes: Some(self.auto_detect_routes),
        }
    }

    /// Check that the configured base URL parses as an absolute URL.
    ///
    /// The builder itself never fails; hosts that want to fail fast on a
    /// bad base URL can call this after building.
    pub fn validate(&self) -> Result<(), MosaicError> {
        url::Url::parse(&self.api_base_url).map_err(|source| MosaicError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            source,
        })?;
        Ok(())
    }
}
