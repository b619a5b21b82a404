//! Record resolution: raw content-store records → canonical entities.
//!
//! This is the one place the fallback table lives. The content site used to
//! repeat the same fallback chains on every page; here they are written once,
//! tested exhaustively, and never re-derived downstream.
//!
//! ## Resolution contract
//!
//! Resolution is total: it never fails, whatever shape the record is in. A
//! missing or wrong-typed field resolves to its documented fallback (the
//! table on [`Post`]), and the only caught error in the whole path is asset
//! URL construction inside [`crate::assets::resolve_image`].
//!
//! Two non-obvious fallbacks:
//!
//! - **date** falls back to *normalization time*, not publish time — a
//!   record with no date is treated as "new as of this render". Batch
//!   resolution snapshots the clock once so all fallback dates in a batch
//!   agree.
//! - **id** must never be empty, so it falls back to the resolved slug, and
//!   failing that to the `"unknown"` sentinel. Resolution stays a pure
//!   per-record function; it never numbers records by position.
//!
//! ## Batch resolution
//!
//! [`Resolver::resolve_posts`] resolves a whole fetch result in parallel
//! with [rayon](https://docs.rs/rayon), preserving input order.

use crate::assets::{self, AssetUrlBuilder};
use crate::config::EngineConfig;
use crate::raw::{RawAuthor, RawRecord};
use crate::types::{Author, AuthorRef, Category, Post};
use chrono::{DateTime, SecondsFormat, Utc};
use rayon::prelude::*;

pub const FALLBACK_ID: &str = "unknown";
pub const FALLBACK_TITLE: &str = "Untitled";
pub const FALLBACK_EXCERPT: &str = "No excerpt available";
pub const FALLBACK_READ_TIME: &str = "3 min read";
pub const FALLBACK_CATEGORY: &str = "Uncategorized";
pub const FALLBACK_CATEGORY_SLUG: &str = "uncategorized";
pub const FALLBACK_AUTHOR_NAME: &str = "Unknown Author";
pub const FALLBACK_CATEGORY_DESCRIPTION: &str = "Articles filed under this category.";

/// Resolves raw records into canonical entities.
///
/// Holds the injected configuration (default image/avatar URLs) and the
/// asset-URL-building collaborator. Carries no mutable state; a resolver is
/// safe to share across threads.
pub struct Resolver<'a, B: AssetUrlBuilder> {
    config: &'a EngineConfig,
    assets: B,
}

impl<'a, B: AssetUrlBuilder + Sync> Resolver<'a, B> {
    pub fn new(config: &'a EngineConfig, assets: B) -> Self {
        Self { config, assets }
    }

    /// Resolve one raw record into a canonical [`Post`].
    ///
    /// Reads the clock for the date fallback; use [`Self::resolve_post_at`]
    /// when determinism matters.
    pub fn resolve_post(&self, raw: &RawRecord) -> Post {
        self.resolve_post_at(raw, Utc::now())
    }

    /// Resolve one raw record with an explicit normalization time.
    pub fn resolve_post_at(&self, raw: &RawRecord, now: DateTime<Utc>) -> Post {
        let slug = raw.slug_str().to_string();
        let id = first_non_empty(&[raw.id.as_deref(), Some(&slug)])
            .unwrap_or_else(|| FALLBACK_ID.to_string());

        Post {
            id,
            title: field(&raw.title, FALLBACK_TITLE),
            excerpt: field(&raw.excerpt, FALLBACK_EXCERPT),
            content: field(&raw.content, ""),
            date: first_non_empty(&[raw.date.as_deref()])
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, true)),
            read_time: field(&raw.read_time, FALLBACK_READ_TIME),
            image: assets::resolve_image(
                raw.image.as_ref(),
                &self.config.assets.default_post_image,
                &self.assets,
            ),
            category: field(&raw.category, FALLBACK_CATEGORY),
            category_slug: field(&raw.category_slug, FALLBACK_CATEGORY_SLUG),
            author: self.resolve_author_ref(raw.author.as_ref()),
            tags: raw.tags.clone(),
            slug,
        }
    }

    /// Resolve a whole fetch result, in input order, in parallel.
    ///
    /// The clock is read once so every date fallback in the batch agrees.
    pub fn resolve_posts(&self, raws: &[RawRecord]) -> Vec<Post> {
        let now = Utc::now();
        raws.par_iter()
            .map(|raw| self.resolve_post_at(raw, now))
            .collect()
    }

    /// Resolve a standalone [`Author`] record.
    ///
    /// `role` and `bio` degrade to empty strings (profile views render them
    /// conditionally); `social` is always a map, possibly empty.
    pub fn resolve_author(&self, raw: &RawRecord) -> Author {
        Author {
            id: field(&raw.id, FALLBACK_ID),
            name: field(&raw.name, FALLBACK_AUTHOR_NAME),
            role: field(&raw.role, ""),
            bio: field(&raw.bio, ""),
            avatar: assets::resolve_image(
                raw.avatar.as_ref(),
                &self.config.assets.default_avatar,
                &self.assets,
            ),
            social: raw.social.clone(),
        }
    }

    /// Resolve a [`Category`] record.
    pub fn resolve_category(&self, raw: &RawRecord) -> Category {
        let slug = first_non_empty(&[Some(raw.slug_str())])
            .unwrap_or_else(|| FALLBACK_CATEGORY_SLUG.to_string());
        let id = first_non_empty(&[raw.id.as_deref(), Some(&slug)])
            .unwrap_or_else(|| FALLBACK_ID.to_string());
        Category {
            id,
            name: field(&raw.name, FALLBACK_CATEGORY),
            description: field(&raw.description, FALLBACK_CATEGORY_DESCRIPTION),
            slug,
        }
    }

    /// Resolve the author summary embedded in a post. An absent author
    /// object takes all its fallbacks, same policy as a full [`Author`].
    fn resolve_author_ref(&self, raw: Option<&RawAuthor>) -> AuthorRef {
        let (id, name, avatar) = match raw {
            Some(author) => (
                field(&author.id, FALLBACK_ID),
                field(&author.name, FALLBACK_AUTHOR_NAME),
                author.avatar.as_ref(),
            ),
            None => (
                FALLBACK_ID.to_string(),
                FALLBACK_AUTHOR_NAME.to_string(),
                None,
            ),
        };
        AuthorRef {
            id,
            name,
            avatar: assets::resolve_image(
                avatar,
                &self.config.assets.default_avatar,
                &self.assets,
            ),
        }
    }
}

/// Resolve one optional field against its fallback. Whitespace-only values
/// count as missing.
fn field(value: &Option<String>, fallback: &str) -> String {
    first_non_empty(&[value.as_deref()]).unwrap_or_else(|| fallback.to_string())
}

/// The first non-empty value from a priority-ordered list of sources.
fn first_non_empty(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .copied()
        .filter_map(|opt| opt.filter(|s| !s.trim().is_empty()).map(String::from))
        .next()
}
