//! The content-store boundary.
//!
//! The live store is an external collaborator; this module pins down the
//! contract the engine relies on ([`ContentStore`]) and provides
//! [`JsonStore`], a local implementation over a JSON document on disk. The
//! CLI and the integration tests run entirely on `JsonStore`, so the engine
//! can be exercised offline with a captured store export.
//!
//! Every fetch returns *raw* records — lenient, partial, untyped — because
//! that is all the store guarantees. Resolution happens after fetching,
//! never inside it. The query methods (`fetch_posts_by_*`,
//! `fetch_post_by_slug`) therefore match on raw fields best-effort: a record
//! with no `categorySlug` simply never matches a category query.
//!
//! ## Document layout
//!
//! `JsonStore` accepts either a bare array of post records:
//!
//! ```json
//! [ { "title": "..." }, { "title": "..." } ]
//! ```
//!
//! or an object with per-collection keys (any subset):
//!
//! ```json
//! { "posts": [...], "authors": [...], "categories": [...] }
//! ```

use crate::raw::RawRecord;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The fetch-by-query interface the content store exposes.
///
/// All methods return raw records; none of them resolve. `Option` results
/// mean "not found", which is a valid answer, not an error.
pub trait ContentStore {
    fn fetch_all_posts(&self) -> Result<Vec<RawRecord>, StoreError>;
    fn fetch_post_by_slug(&self, slug: &str) -> Result<Option<RawRecord>, StoreError>;
    fn fetch_all_categories(&self) -> Result<Vec<RawRecord>, StoreError>;
    fn fetch_author_by_id(&self, id: &str) -> Result<Option<RawRecord>, StoreError>;
    fn fetch_posts_by_category(&self, slug: &str) -> Result<Vec<RawRecord>, StoreError>;
    fn fetch_posts_by_author(&self, id: &str) -> Result<Vec<RawRecord>, StoreError>;
    fn fetch_posts_by_tag(&self, tag: &str) -> Result<Vec<RawRecord>, StoreError>;
}

/// A content store backed by a JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    posts: Vec<Value>,
    authors: Vec<Value>,
    categories: Vec<Value>,
}

impl JsonStore {
    /// Load a store document from disk.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        Ok(Self::from_value(document))
    }

    /// Build a store from an in-memory document (see module docs for the
    /// accepted layouts). Unrecognized shapes yield an empty store.
    pub fn from_value(document: Value) -> Self {
        match document {
            Value::Array(posts) => Self {
                posts,
                authors: Vec::new(),
                categories: Vec::new(),
            },
            Value::Object(mut doc) => Self {
                posts: take_array(&mut doc, "posts"),
                authors: take_array(&mut doc, "authors"),
                categories: take_array(&mut doc, "categories"),
            },
            _ => Self {
                posts: Vec::new(),
                authors: Vec::new(),
                categories: Vec::new(),
            },
        }
    }

    fn records(values: &[Value]) -> Vec<RawRecord> {
        values.iter().map(RawRecord::from_value).collect()
    }
}

fn take_array(doc: &mut serde_json::Map<String, Value>, key: &str) -> Vec<Value> {
    match doc.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

impl ContentStore for JsonStore {
    fn fetch_all_posts(&self) -> Result<Vec<RawRecord>, StoreError> {
        Ok(Self::records(&self.posts))
    }

    fn fetch_post_by_slug(&self, slug: &str) -> Result<Option<RawRecord>, StoreError> {
        Ok(Self::records(&self.posts)
            .into_iter()
            .find(|record| !slug.is_empty() && record.slug_str() == slug))
    }

    fn fetch_all_categories(&self) -> Result<Vec<RawRecord>, StoreError> {
        Ok(Self::records(&self.categories))
    }

    fn fetch_author_by_id(&self, id: &str) -> Result<Option<RawRecord>, StoreError> {
        Ok(Self::records(&self.authors)
            .into_iter()
            .find(|record| record.id.as_deref() == Some(id)))
    }

    fn fetch_posts_by_category(&self, slug: &str) -> Result<Vec<RawRecord>, StoreError> {
        Ok(Self::records(&self.posts)
            .into_iter()
            .filter(|record| record.category_slug.as_deref() == Some(slug))
            .collect())
    }

    fn fetch_posts_by_author(&self, id: &str) -> Result<Vec<RawRecord>, StoreError> {
        Ok(Self::records(&self.posts)
            .into_iter()
            .filter(|record| {
                record
                    .author
                    .as_ref()
                    .and_then(|author| author.id.as_deref())
                    == Some(id)
            })
            .collect())
    }

    fn fetch_posts_by_tag(&self, tag: &str) -> Result<Vec<RawRecord>, StoreError> {
        Ok(Self::records(&self.posts)
            .into_iter()
            .filter(|record| {
                record
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase() == tag.to_lowercase())
            })
            .collect())
    }
}
