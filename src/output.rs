//! CLI output formatting for the engine's views.
//!
//! # Information-First Display
//!
//! Output is information-centric: the primary display for every post is its
//! semantic identity — positional index + title — with slug, date, and tags
//! as indented context lines. This makes the output readable as a content
//! inventory while still letting users trace an entry back to a store
//! record.
//!
//! ```text
//! Posts
//! 001 Designing APIs (design)
//!     Slug: designing-apis
//!     Date: 2023-07-15
//!     Tags: rust, web
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::archive::MonthBucket;
use crate::tags;
use crate::types::Post;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for one post: index, title, category.
fn post_header(index: usize, post: &Post) -> String {
    format!("{} {} ({})", format_index(index), post.title, post.category_slug)
}

/// Context lines for one post at the given indent depth.
fn post_context(post: &Post, depth: usize) -> Vec<String> {
    let mut lines = vec![
        format!("{}Slug: {}", indent(depth), post.slug),
        format!("{}Date: {}", indent(depth), post.date),
    ];
    if !post.tags.is_empty() {
        lines.push(format!("{}Tags: {}", indent(depth), post.tags.join(", ")));
    }
    lines
}

/// Format a resolved post collection.
pub fn format_post_list(posts: &[Post]) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (i, post) in posts.iter().enumerate() {
        lines.push(post_header(i + 1, post));
        lines.extend(post_context(post, 1));
    }
    lines.push(format!(
        "{} post{}",
        posts.len(),
        if posts.len() == 1 { "" } else { "s" }
    ));
    lines
}

/// Format the month archive.
///
/// ```text
/// July 2023 (2 posts)
///     001 Designing APIs
///     002 Color Theory
/// ```
pub fn format_archive(buckets: &[MonthBucket]) -> Vec<String> {
    let mut lines = Vec::new();
    for bucket in buckets {
        lines.push(format!(
            "{} ({} post{})",
            bucket.label,
            bucket.posts.len(),
            if bucket.posts.len() == 1 { "" } else { "s" }
        ));
        for (i, post) in bucket.posts.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), post.title));
        }
    }
    lines
}

/// Format the tag universe with per-tag post counts, first-appearance order.
pub fn format_tag_list(posts: &[Post]) -> Vec<String> {
    tags::all_tags(posts)
        .iter()
        .map(|tag| {
            let count = tags::posts_by_tag(posts, tag).len();
            format!(
                "{tag} ({count} post{})",
                if count == 1 { "" } else { "s" }
            )
        })
        .collect()
}

/// Format a related-posts selection for one subject post.
pub fn format_related(subject: &Post, related: &[Post]) -> Vec<String> {
    let mut lines = vec![format!("Related to: {}", subject.title)];
    for (i, post) in related.iter().enumerate() {
        lines.push(post_header(i + 1, post));
    }
    if related.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    lines
}

pub fn print_post_list(posts: &[Post]) {
    for line in format_post_list(posts) {
        println!("{line}");
    }
}

pub fn print_archive(buckets: &[MonthBucket]) {
    for line in format_archive(buckets) {
        println!("{line}");
    }
}

pub fn print_tag_list(posts: &[Post]) {
    for line in format_tag_list(posts) {
        println!("{line}");
    }
}

pub fn print_related(subject: &Post, related: &[Post]) {
    for line in format_related(subject, related) {
        println!("{line}");
    }
}
