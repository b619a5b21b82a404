//! # Pressroom
//!
//! A content normalization and derived-view engine for content sites.
//! Records fetched from an external content store arrive partial,
//! inconsistently named, and union-shaped; Pressroom turns them into a
//! complete, render-ready domain model and computes the derived collections
//! listing pages need.
//!
//! # Architecture: Ingest → Resolve → Derive
//!
//! ```text
//! 1. Ingest    raw JSON records  →  RawRecord      (lenient, never fails)
//! 2. Resolve   RawRecord         →  Post/Author/Category  (fallback table)
//! 3. Derive    canonical posts   →  archive, tags, related, filtered views
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **One fallback table**: the site used to repeat the same fallback
//!   chains on every page; here they live in one resolver, tested once.
//! - **Total functions**: each stage degrades to documented defaults instead
//!   of raising — nothing in this engine can abort a page render.
//! - **Testability**: every stage is a pure function over already-fetched
//!   data, so unit tests never touch the network.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`raw`] | Ingestion boundary — lenient record deserialization, slug/image tagged unions |
//! | [`types`] | Canonical `Post`, `Author`, `Category` shapes consumers render from |
//! | [`resolve`] | The fallback table: raw record → canonical entity, batch via rayon |
//! | [`assets`] | Image-reference resolution: URL passthrough, CDN ref building, logged degradation |
//! | [`related`] | Related-post selection by shared category with stable backfill |
//! | [`archive`] | Month/year bucketing with fixed English labels |
//! | [`tags`] | Case-insensitive tag universe and tag lookups |
//! | [`filter`] | Category + text-search filtering for listing pages |
//! | [`store`] | `ContentStore` contract and the JSON-file-backed local store |
//! | [`config`] | `config.toml` loading: injected default URLs, CDN base, view limits |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## Union Shapes Die at the Boundary
//!
//! The store's slug field is either a string or a `{current}` wrapper; the
//! image field is either a URL or an opaque asset reference. These are
//! modeled as tagged enums in [`raw`] and settled exactly once by
//! [`resolve`] — no consumer ever branches on a raw shape.
//!
//! ## Degrade, Don't Raise
//!
//! The store is an external source of truth the site does not control. A
//! missing field resolves to its documented fallback; a malformed asset
//! reference is caught in exactly one function ([`assets::resolve_image`]),
//! logged via `tracing`, and degraded to the configured default; an
//! unparseable date is skipped by archive grouping and nowhere else. No
//! error category in this engine aborts a render.
//!
//! ## Injected Defaults
//!
//! The default post image and avatar URLs are configuration
//! ([`config::EngineConfig`]), passed into resolution — never module-level
//! constants — so tests can pin them and deployments can rebrand them.
//!
//! ## Fixed-Locale Month Labels
//!
//! Archive bucket labels ("July 2023") come from a fixed English month
//! table, not the system locale. The labels feed stable archive URLs, so
//! they must not vary by environment.

pub mod archive;
pub mod assets;
pub mod config;
pub mod filter;
pub mod output;
pub mod raw;
pub mod related;
pub mod resolve;
pub mod store;
pub mod tags;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
