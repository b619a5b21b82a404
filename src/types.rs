//! Canonical entity types produced by resolution.
//!
//! These are the shapes the rest of the engine (and the presentation layer)
//! consumes. Every field is fully resolved: no optional fields, no raw
//! reference objects, no wrapper shapes. A consumer holding a [`Post`] never
//! has to branch on "is the slug a string or an object" — that branching
//! happened exactly once, at the ingestion boundary ([`crate::raw`]), and was
//! settled by [`crate::resolve`].
//!
//! The types serialize with camelCase field names so the JSON the CLI emits
//! matches what content-store payloads use. This also makes resolution
//! idempotent: a serialized canonical `Post` re-ingested as a raw record
//! resolves back to itself.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fully-resolved post, ready for rendering and for the derived views.
///
/// Fallback values applied during resolution:
///
/// | Field | Fallback |
/// |-------|----------|
/// | `title` | `"Untitled"` |
/// | `slug` | `""` (extracted from string or `{current}` wrapper) |
/// | `excerpt` | `"No excerpt available"` |
/// | `content` | `""` |
/// | `date` | normalization time (RFC 3339) |
/// | `read_time` | `"3 min read"` |
/// | `image` | default post image from config |
/// | `category` | `"Uncategorized"` |
/// | `category_slug` | `"uncategorized"` |
/// | `tags` | empty sequence |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identifier. Never empty: falls back to the slug, then to
    /// the `"unknown"` sentinel.
    pub id: String,
    pub title: String,
    /// Always a flat string; the raw `{current}` wrapper never escapes
    /// the ingestion boundary.
    pub slug: String,
    pub excerpt: String,
    /// Body text. May be empty — an empty body is valid content.
    pub content: String,
    /// ISO-8601 date string. Unparseable dates are tolerated everywhere
    /// except archive grouping, which skips them.
    pub date: String,
    /// Display string, e.g. `"3 min read"`.
    pub read_time: String,
    /// Resolved absolute URL. Never empty.
    pub image: String,
    pub category: String,
    pub category_slug: String,
    pub author: AuthorRef,
    /// Case-preserving, insertion order preserved. Duplicates are allowed
    /// here; deduplication is the tag index's job.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The author summary embedded in every [`Post`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    pub id: String,
    /// Fallback `"Unknown Author"`.
    pub name: String,
    /// Resolved absolute URL. Falls back to the default avatar from config.
    pub avatar: String,
}

/// A standalone author entity, used on author-profile views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
    /// Platform name → handle (e.g. `"twitter"` → `"@jane"`). Any subset of
    /// platforms may be present. An absent social block normalizes to an
    /// empty map — consumers branch on key presence, never on map presence.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

/// A content category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Fallback is a generic description, never empty.
    pub description: String,
    pub slug: String,
}
