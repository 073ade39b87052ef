//! Error types for the Mosaic SDK.

use miette::Diagnostic;

/// Main error type for SDK operations.
///
/// The client's read-path methods never return this to callers: transport
/// and decode failures are logged and degraded to empty results inside the
/// client. What does surface here are contract violations (using the
/// registry before configuring it) and validation helpers.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum MosaicError {
    /// The registry was consulted before `configure` was called.
    #[error("Mosaic SDK not configured")]
    #[diagnostic(
        code(mosaic::not_configured),
        help("call `MosaicRegistry::configure` once at application startup, before requesting the client or config")
    )]
    NotConfigured,

    /// The configured API base URL does not parse as an absolute URL.
    #[error("invalid API base URL: {url}")]
    #[diagnostic(code(mosaic::invalid_base_url))]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP transport error.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Persisted path store failure.
    #[error("path store error: {0}")]
    #[diagnostic(code(mosaic::path_store))]
    Store(String),
}
