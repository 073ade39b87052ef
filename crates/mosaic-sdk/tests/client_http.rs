//! HTTP contract tests for the API client, against a mock server.
//!
//! These pin the exact wire behavior a Mosaic instance sees: endpoint
//! normalization, query parameters, auth and domain headers, and the
//! degrade-on-failure contract of every operation.

use mockito::Matcher;
use mosaic_sdk::{
    ListPostsParams, MosaicClient, MosaicConfig, PartialConfig, PartialSiteInfo,
    RegisterDestination, RouteKind,
};

fn client(base: &str, api_key: Option<&str>, domain: Option<&str>) -> MosaicClient {
    let mut partial = PartialConfig::new(base);
    partial.api_key = api_key.map(str::to_owned);
    partial.site = Some(PartialSiteInfo {
        domain: domain.map(str::to_owned),
        ..Default::default()
    });
    MosaicClient::new(&MosaicConfig::build(partial))
}

fn post_list_body() -> String {
    serde_json::json!({
        "posts": [{
            "id": 1,
            "title": "Hello",
            "slug": "hello",
            "content": { "type": "doc", "content": [] },
            "status": "published",
            "labels": ["intro"],
            "publishedAt": "2026-01-05T09:00:00Z",
            "authorId": "author-1"
        }],
        "pagination": { "page": 1, "limit": 10, "totalItems": 1, "hasMore": false }
    })
    .to_string()
}

#[tokio::test]
async fn list_posts_sends_query_and_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/blog")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("category".into(), "rust".into()),
            Matcher::UrlEncoded("path".into(), "/articles".into()),
            Matcher::UrlEncoded("domain".into(), "https://example.com".into()),
        ]))
        .match_header("authorization", "Bearer secret-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(post_list_body())
        .expect(1)
        .create_async()
        .await;

    let client = client(&server.url(), Some("secret-key"), Some("https://example.com"));
    let list = client
        .list_posts(ListPostsParams {
            path: Some("/articles".into()),
            page: Some(2),
            limit: Some(5),
            category: Some("rust".into()),
        })
        .await;

    mock.assert_async().await;
    assert_eq!(list.posts.len(), 1);
    assert_eq!(list.posts[0].slug, "hello");
    assert!(!list.pagination.has_more);
}

#[tokio::test]
async fn list_posts_defaults_to_configured_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/blog")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("path".into(), "/blog".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(post_list_body())
        .expect(1)
        .create_async()
        .await;

    let client = client(&server.url(), None, None);
    client.list_posts(ListPostsParams::default()).await;
    mock.assert_async().await;
}

#[tokio::test]
async fn list_posts_degrades_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/blog")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = client(&server.url(), None, None);
    let list = client
        .list_posts(ListPostsParams {
            page: Some(3),
            limit: Some(7),
            ..Default::default()
        })
        .await;

    assert!(list.posts.is_empty());
    assert_eq!(list.pagination.page, 3);
    assert_eq!(list.pagination.limit, 7);
    assert_eq!(list.pagination.total_items, 0);
    assert!(!list.pagination.has_more);
}

#[tokio::test]
async fn blog_segment_not_duplicated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/blog")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(post_list_body())
        .expect(1)
        .create_async()
        .await;

    // Base URL already ends with /blog; the client must not append it again.
    let client = client(&format!("{}/blog", server.url()), None, None);
    client.list_posts(ListPostsParams::default()).await;
    mock.assert_async().await;
}

#[tokio::test]
async fn get_post_sends_domain_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/blog/hello")
        .match_header("authorization", "Bearer secret-key")
        .match_header("x-site-domain", "https://example.com")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "post": {
                    "id": 1,
                    "title": "Hello",
                    "slug": "hello",
                    "content": { "type": "doc", "content": [] },
                    "status": "published",
                    "authorId": "author-1"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = client(&server.url(), Some("secret-key"), Some("https://example.com"));
    let envelope = client.get_post("hello").await;
    mock.assert_async().await;
    assert_eq!(envelope.post.unwrap().title, "Hello");
}

#[tokio::test]
async fn get_post_missing_slug_is_absent_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/blog/missing-slug")
        .with_status(404)
        .create_async()
        .await;

    let client = client(&server.url(), None, None);
    let envelope = client.get_post("missing-slug").await;
    assert!(envelope.post.is_none());
}

#[tokio::test]
async fn register_without_api_key_issues_no_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/destinations")
        .expect(0)
        .create_async()
        .await;

    let client = client(&server.url(), None, Some("https://example.com"));
    let outcome = client
        .register_destination(RegisterDestination::new("/blog"))
        .await;

    mock.assert_async().await;
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("API key required"));
}

#[tokio::test]
async fn register_without_domain_issues_no_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/destinations")
        .expect(0)
        .create_async()
        .await;

    let client = client(&server.url(), Some("secret-key"), None);
    let outcome = client
        .register_destination(RegisterDestination::new("/blog"))
        .await;

    mock.assert_async().await;
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Site domain required"));
}

#[tokio::test]
async fn register_posts_expected_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/destinations")
        .match_header("authorization", "Bearer secret-key")
        .match_body(Matcher::Json(serde_json::json!({
            "path": "/news",
            "type": "category",
            "name": "https://example.com/news",
            "domain": "https://example.com"
        })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = client(&server.url(), Some("secret-key"), Some("https://example.com"));
    let outcome = client
        .register_destination(RegisterDestination::new("/news").with_kind(RouteKind::Category))
        .await;

    mock.assert_async().await;
    assert!(outcome.success);
    assert_eq!(outcome.message, None);
}

#[tokio::test]
async fn register_degrades_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/destinations")
        .with_status(503)
        .create_async()
        .await;

    let client = client(&server.url(), Some("secret-key"), Some("https://example.com"));
    let outcome = client
        .register_destination(RegisterDestination::new("/blog"))
        .await;

    assert!(!outcome.success);
    assert!(outcome.message.is_some());
}
