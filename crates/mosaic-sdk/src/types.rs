//! API-facing data model.
//!
//! Wire shapes use camelCase field names to match the Mosaic API. The
//! rich-text document is a tagged recursive tree owned entirely by its
//! root, so recursive-descent rendering needs no cycle handling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A published (or draft) post as returned by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Structured editor content.
    pub content: RichTextNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub status: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// ISO-8601 publication timestamp, absent for unpublished posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub author_id: String,
}

/// One page of posts plus its pagination envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

impl PostList {
    /// The synthetic result returned when a list fetch degrades: no posts,
    /// pagination echoing the request.
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            posts: Vec::new(),
            pagination: Pagination {
                page,
                limit,
                total_items: 0,
                has_more: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    /// True iff more posts exist beyond this page at this limit.
    pub has_more: bool,
}

/// Single-post fetch result. `post: None` means "not found" — callers must
/// not try to distinguish it from a transport failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEnvelope {
    #[serde(default)]
    pub post: Option<Post>,
}

/// A node of the editor's document tree.
///
/// `kind` is an open string tag rather than a closed enum: the editor grows
/// node types over time and unknown kinds must survive a decode/encode
/// round trip untouched. A leaf carrying `text` has no children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichTextNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<RichTextMark>,
    /// Open attribute bag: heading level, image src, list start, alignment…
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
    /// Document-level metadata, populated on root nodes only.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,
}

impl RichTextNode {
    /// A `doc` root with the given children.
    pub fn doc(content: Vec<RichTextNode>) -> Self {
        Self {
            kind: "doc".to_owned(),
            content,
            ..Self::default()
        }
    }

    /// An unmarked text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_owned(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    pub fn attr_i64(&self, key: &str) -> Option<i64> {
        self.attrs.get(key).and_then(Value::as_i64)
    }

    pub fn attr_bool(&self, key: &str) -> Option<bool> {
        self.attrs.get(key).and_then(Value::as_bool)
    }

    /// Whether the document asks for full-width display.
    pub fn is_full_width(&self) -> bool {
        self.meta
            .get("isFullWidth")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// A formatting mark applied to a text leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextMark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
}

impl RichTextMark {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_tree_round_trips() {
        let raw = serde_json::json!({
            "type": "doc",
            "meta": { "isFullWidth": true },
            "content": [{
                "type": "paragraph",
                "content": [{ "type": "text", "text": "hi" }]
            }]
        });
        let doc: RichTextNode = serde_json::from_value(raw.clone()).unwrap();
        assert!(doc.is_full_width());
        assert_eq!(doc.content[0].content[0].text.as_deref(), Some("hi"));
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn unknown_kinds_and_attrs_survive_round_trip() {
        let raw = serde_json::json!({
            "type": "galleryBlock",
            "attrs": { "columns": 3, "caption": "shots" },
            "content": [{ "type": "text", "text": "x" }]
        });
        let node: RichTextNode = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(node.kind, "galleryBlock");
        assert_eq!(node.attr_i64("columns"), Some(3));
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);
    }

    #[test]
    fn envelope_defaults_to_absent_post() {
        let envelope: PostEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.post.is_none());
    }

    #[test]
    fn pagination_wire_names() {
        let list = PostList::empty(3, 20);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["pagination"]["totalItems"], 0);
        assert_eq!(json["pagination"]["hasMore"], false);
        assert_eq!(json["pagination"]["page"], 3);
    }
}
