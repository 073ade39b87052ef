//! HTTP client for the Mosaic content API.
//!
//! Every operation here is total: transport failures, non-success statuses
//! and decode errors are logged and degraded to a well-formed value instead
//! of propagating. Callers render pages with these results and a single
//! failed fetch must never abort that render, so no `?` ever reaches them.

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::config::{MosaicConfig, RouteKind};
use crate::error::MosaicError;
use crate::types::{PostEnvelope, PostList};

/// Advisory freshness hint attached to read requests. Transports that
/// ignore it are conformant; it only enables response reuse where an
/// intermediary honors `Cache-Control`.
const REVALIDATE_SECS: u64 = 60;

/// Header carrying the site domain on single-post fetches.
const SITE_DOMAIN_HEADER: &str = "X-Site-Domain";

/// Client for a single configured Mosaic instance.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct MosaicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    site_domain: Option<String>,
    default_path: String,
}

/// Parameters for [`MosaicClient::list_posts`]. Unset fields take the
/// documented defaults (`path` = configured default path, `page` = 1,
/// `limit` = 10).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPostsParams {
    pub path: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
}

/// A destination registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDestination {
    pub path: String,
    pub kind: RouteKind,
    /// Display name; defaults to `{domain}{path}` when unset.
    pub name: Option<String>,
}

impl RegisterDestination {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: RouteKind::List,
            name: None,
        }
    }

    pub fn with_kind(mut self, kind: RouteKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Outcome of a destination registration. Preconditions and transport
/// failures both land here as `success: false`; nothing is thrown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RegisterOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl MosaicClient {
    pub fn new(config: &MosaicConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            site_domain: (!config.site.domain.is_empty()).then(|| config.site.domain.clone()),
            default_path: config.site.default_path.clone(),
        }
    }

    /// The list/post resource root. The `/blog` segment is appended only
    /// when the base URL does not already end with it.
    fn blog_endpoint(&self) -> String {
        if self.base_url.ends_with("/blog") {
            self.base_url.clone()
        } else {
            format!("{}/blog", self.base_url)
        }
    }

    fn read_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, format!("max-age={REVALIDATE_SECS}"));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request
    }

    /// List posts for a destination path.
    ///
    /// Degrades to an empty [`PostList`] echoing the requested page/limit
    /// on any failure.
    pub async fn list_posts(&self, params: ListPostsParams) -> PostList {
        let page = params.page.unwrap_or(1);
        let limit = params.limit.unwrap_or(10);
        match self.try_list_posts(&params, page, limit).await {
            Ok(list) => list,
            Err(err) => {
                error!(page, limit, %err, "error fetching Mosaic posts");
                PostList::empty(page, limit)
            }
        }
    }

    async fn try_list_posts(
        &self,
        params: &ListPostsParams,
        page: u32,
        limit: u32,
    ) -> Result<PostList, MosaicError> {
        let mut query: Vec<(&str, String)> =
            vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(category) = &params.category {
            query.push(("category", category.clone()));
        }
        let path = params
            .path
            .clone()
            .unwrap_or_else(|| self.default_path.clone());
        if !path.is_empty() {
            query.push(("path", path));
        }
        if let Some(domain) = &self.site_domain {
            query.push(("domain", domain.clone()));
        }

        let url = self.blog_endpoint();
        debug!(%url, page, limit, "listing posts");
        let response = self
            .read_request(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch a single post by slug.
    ///
    /// Returns `post: None` on any failure, including 404 — callers treat
    /// absence as "not found".
    pub async fn get_post(&self, slug: &str) -> PostEnvelope {
        match self.try_get_post(slug).await {
            Ok(envelope) => envelope,
            Err(err) => {
                error!(slug, %err, "error fetching Mosaic post");
                PostEnvelope::default()
            }
        }
    }

    async fn try_get_post(&self, slug: &str) -> Result<PostEnvelope, MosaicError> {
        let url = format!("{}/{}", self.blog_endpoint(), slug);
        debug!(%url, "fetching post");
        let mut request = self.read_request(&url);
        if let Some(domain) = &self.site_domain {
            request = request.header(SITE_DOMAIN_HEADER, domain);
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Register a path on the hosting site as a content destination.
    ///
    /// Requires both an API key and a configured site domain; without them
    /// the call short-circuits before any network I/O. The server-side
    /// endpoint is idempotent for the same path/domain pair.
    pub async fn register_destination(&self, destination: RegisterDestination) -> RegisterOutcome {
        let Some(api_key) = &self.api_key else {
            warn!("cannot register destination without an API key");
            return RegisterOutcome::rejected("API key required");
        };
        let Some(domain) = &self.site_domain else {
            warn!("cannot register destination without a site domain");
            return RegisterOutcome::rejected("Site domain required");
        };

        let name = destination
            .name
            .unwrap_or_else(|| format!("{domain}{}", destination.path));
        let body = serde_json::json!({
            "path": destination.path,
            "type": destination.kind,
            "name": name,
            "domain": domain,
        });

        let url = format!("{}/destinations", self.base_url);
        debug!(%url, path = %destination.path, "registering destination");
        let result = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .and_then(|response| response.error_for_status());
        match result {
            Ok(_) => RegisterOutcome::ok(),
            Err(err) => {
                error!(%err, "error registering destination");
                RegisterOutcome::rejected(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialConfig;

    fn client_for(base: &str) -> MosaicClient {
        MosaicClient::new(&MosaicConfig::build(PartialConfig::new(base)))
    }

    #[test]
    fn blog_segment_appended_once() {
        assert_eq!(
            client_for("https://cms.example.com/api/v1").blog_endpoint(),
            "https://cms.example.com/api/v1/blog"
        );
        assert_eq!(
            client_for("https://cms.example.com/api/v1/blog").blog_endpoint(),
            "https://cms.example.com/api/v1/blog"
        );
        // Trailing slash is normalized away before the suffix check.
        assert_eq!(
            client_for("https://cms.example.com/api/v1/blog/").blog_endpoint(),
            "https://cms.example.com/api/v1/blog"
        );
    }

    #[test]
    fn empty_domain_is_unset() {
        let client = client_for("https://cms.example.com");
        assert_eq!(client.site_domain, None);
    }
}
