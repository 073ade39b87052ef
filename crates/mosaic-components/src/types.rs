//! Display-oriented projection of the API data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use mosaic_sdk::types::Post;

/// A flattened, display-oriented projection of [`Post`].
///
/// `content` and `labels` are pre-serialized JSON strings so the value can
/// be passed around as plain props; timestamps are concrete date values.
/// Projection never fails: unparsable timestamps simply become `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Serialized rich-text document.
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub status: String,
    /// Serialized JSON array of label strings.
    pub labels: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author_id: String,
}

impl BlogPost {
    /// The parsed label list; corrupt payloads read as empty.
    pub fn label_list(&self) -> Vec<String> {
        serde_json::from_str(&self.labels).unwrap_or_default()
    }
}

impl From<Post> for BlogPost {
    fn from(post: Post) -> Self {
        let published_at = post.published_at.as_deref().and_then(parse_timestamp);
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: serde_json::to_string(&post.content).unwrap_or_default(),
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            status: post.status,
            labels: serde_json::to_string(&post.labels).unwrap_or_default(),
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            published_at,
            created_at: None,
            updated_at: None,
            author_id: post.author_id,
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            warn!(raw, %err, "unparsable post timestamp");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_sdk::types::RichTextNode;

    fn sample_post(published_at: Option<&str>) -> Post {
        Post {
            id: 7,
            title: "Hello".into(),
            slug: "hello".into(),
            content: RichTextNode::doc(vec![]),
            excerpt: Some("short".into()),
            featured_image: None,
            status: "published".into(),
            labels: vec!["intro".into(), "news".into()],
            seo_title: None,
            seo_description: None,
            published_at: published_at.map(str::to_owned),
            author_id: "author-1".into(),
        }
    }

    #[test]
    fn projection_flattens_content_and_labels() {
        let projected = BlogPost::from(sample_post(Some("2026-01-05T09:00:00Z")));
        assert_eq!(projected.content, r#"{"type":"doc"}"#);
        assert_eq!(projected.labels, r#"["intro","news"]"#);
        assert_eq!(projected.label_list(), vec!["intro", "news"]);
        assert!(projected.published_at.is_some());
    }

    #[test]
    fn unparsable_timestamp_becomes_none() {
        let projected = BlogPost::from(sample_post(Some("last tuesday")));
        assert_eq!(projected.published_at, None);
    }

    #[test]
    fn absent_timestamp_stays_absent() {
        let projected = BlogPost::from(sample_post(None));
        assert_eq!(projected.published_at, None);
    }
}
