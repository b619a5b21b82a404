//! Shared test utilities for the pressroom test suite.
//!
//! Provides canonical-post builders for the derived-view tests and raw
//! record/resolver constructors for the resolution tests. The builders fill
//! every field with a valid, boring value so each test only spells out the
//! fields it actually exercises.

use crate::assets::CdnUrlBuilder;
use crate::config::EngineConfig;
use crate::raw::RawRecord;
use crate::resolve::Resolver;
use crate::types::{AuthorRef, Post};
use serde_json::Value;

/// A `config.toml` with deterministic test URLs.
pub const TEST_CONFIG_TOML: &str = r#"
[assets]
cdn_base_url = "https://cdn.test/images"
default_post_image = "https://cdn.test/defaults/post.jpg"
default_avatar = "https://cdn.test/defaults/avatar.png"
"#;

/// Build a raw record from inline JSON.
pub fn record(value: Value) -> RawRecord {
    RawRecord::from_value(&value)
}

/// A resolver wired to the config's own CDN base.
pub fn test_resolver(config: &EngineConfig) -> Resolver<'_, CdnUrlBuilder> {
    Resolver::new(config, CdnUrlBuilder::new(config.assets.cdn_base_url.clone()))
}

// =========================================================================
// Canonical post builders
// =========================================================================

/// A fully-populated post with the given id. Every field is valid; tests
/// override the ones they care about.
pub fn post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {id}"),
        slug: id.to_string(),
        excerpt: format!("Excerpt for {id}"),
        content: String::new(),
        date: "2024-01-15".to_string(),
        read_time: "3 min read".to_string(),
        image: "https://cdn.test/defaults/post.jpg".to_string(),
        category: "General".to_string(),
        category_slug: "general".to_string(),
        author: AuthorRef {
            id: "a1".to_string(),
            name: "Jane Doe".to_string(),
            avatar: "https://cdn.test/defaults/avatar.png".to_string(),
        },
        tags: Vec::new(),
    }
}

/// A post in the given category.
pub fn post_in(id: &str, category_slug: &str) -> Post {
    Post {
        category_slug: category_slug.to_string(),
        ..post(id)
    }
}

/// A post with the given date string (possibly unparseable, on purpose).
pub fn dated_post(id: &str, date: &str) -> Post {
    Post {
        date: date.to_string(),
        ..post(id)
    }
}

/// A post with the given tags, casing preserved.
pub fn tagged_post(id: &str, tags: &[&str]) -> Post {
    Post {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..post(id)
    }
}

/// A post with the given title and excerpt, for text-search tests.
pub fn searchable_post(id: &str, title: &str, excerpt: &str) -> Post {
    Post {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        ..post(id)
    }
}
