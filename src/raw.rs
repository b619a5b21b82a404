//! The ingestion boundary: lenient deserialization of content-store records.
//!
//! The content store is an external, not-fully-controlled source of truth.
//! Records it returns are partial JSON objects: any field may be missing,
//! wrong-typed, or spelled under an alternate name (`mainImage` vs `image`,
//! `publishedAt` vs `date`). Two fields are genuinely union-shaped:
//!
//! - **slug** is either a plain string or a wrapper object exposing a
//!   `current` property
//! - **image** is either an already-absolute URL string or an opaque asset
//!   reference that must be built into a URL
//!
//! This module settles all of that exactly once. The union shapes become
//! tagged enums ([`RawSlug`], [`RawImage`]) and every scalar field
//! deserializes through a lenient adapter that maps a wrong-typed value to
//! "absent" instead of an error. Deserializing a [`RawRecord`] from any JSON
//! value therefore never fails — missing and malformed fields surface as
//! `None`/empty, and the resolver ([`crate::resolve`]) turns those into
//! documented fallbacks.
//!
//! Nothing downstream of this module ever branches on a raw shape again.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// An unvalidated record as returned by the content store.
///
/// One struct covers posts, authors, and categories — the store does not
/// guarantee which fields a record carries, so the resolver picks the ones
/// relevant to the entity it is building and falls back for the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    pub slug: Option<RawSlug>,
    #[serde(deserialize_with = "lenient_string")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "lenient_string", alias = "body")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient_string", alias = "publishedAt")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub read_time: Option<String>,
    #[serde(alias = "mainImage", alias = "coverImage")]
    pub image: Option<RawImage>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category_slug: Option<String>,
    #[serde(deserialize_with = "lenient_author")]
    pub author: Option<RawAuthor>,
    #[serde(deserialize_with = "lenient_string_seq")]
    pub tags: Vec<String>,

    // Author-record fields
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub bio: Option<String>,
    pub avatar: Option<RawImage>,
    #[serde(deserialize_with = "lenient_string_map")]
    pub social: BTreeMap<String, String>,

    // Category-record fields
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl RawRecord {
    /// Deserialize a record from an arbitrary JSON value.
    ///
    /// Non-object values (and anything else the lenient fields can't absorb)
    /// produce the empty record, which resolves to all-fallbacks. This is
    /// the contract with the store: a record can be garbage, a page render
    /// cannot fail because of it.
    pub fn from_value(value: &Value) -> RawRecord {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// The flat slug string, if the record has a usable slug in either shape.
    pub fn slug_str(&self) -> &str {
        self.slug.as_ref().map(RawSlug::as_str).unwrap_or("")
    }
}

/// The two shapes a slug arrives in, plus a catch-all for anything else.
///
/// Variant order matters for `untagged` deserialization: a plain string is
/// tried first, then the wrapper object, and any other value (number, array,
/// wrapper without `current`) lands in `Invalid` and resolves to the empty
/// slug.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawSlug {
    Plain(String),
    Wrapped { current: String },
    Invalid(Value),
}

impl RawSlug {
    /// Extract the flat slug string. `Invalid` extracts to `""`.
    pub fn as_str(&self) -> &str {
        match self {
            RawSlug::Plain(s) => s,
            RawSlug::Wrapped { current } => current,
            RawSlug::Invalid(_) => "",
        }
    }
}

/// An image field: either text (a URL, or an opaque ref written inline as a
/// string) or a reference object for the asset-URL builder.
///
/// Which strings count as URLs is not decided here — that is
/// [`crate::assets::resolve_image`]'s decision procedure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawImage {
    Text(String),
    Reference(Value),
}

/// The author object nested inside a post record. Same lenient policy as
/// the record itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAuthor {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(alias = "image")]
    pub avatar: Option<RawImage>,
}

// ============================================================================
// Lenient field adapters — wrong-typed values become "absent", never errors
// ============================================================================

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A sequence of strings; a non-array value yields the empty sequence and
/// non-string elements are dropped. Order of the surviving elements is
/// preserved, duplicates included.
fn lenient_string_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// A string → string map; a non-object yields the empty map and non-string
/// values are dropped.
fn lenient_string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(key, item)| match item {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// A nested author object; anything that isn't an object (e.g. an author
/// written as a bare name string) counts as absent and takes full fallbacks.
fn lenient_author<'de, D>(deserializer: D) -> Result<Option<RawAuthor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}
