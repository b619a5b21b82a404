//! Tag indexing: the deduplicated tag universe and tag-based lookups.
//!
//! Tags are case-preserving but compared case-insensitively: `"Design"` and
//! `"design"` are the same tag, displayed with whichever casing appeared
//! first. Posts keep their tag sequences verbatim (duplicates and all); this
//! module is where deduplication and case-folding happen.

use crate::types::Post;
use std::collections::HashSet;

/// Case-insensitive tag equality.
fn tag_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// The deduplicated tag universe across `posts`, in order of first
/// appearance. The first-seen casing wins for display.
pub fn all_tags(posts: &[Post]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tags = Vec::new();
    for post in posts {
        for tag in &post.tags {
            if seen.insert(tag.to_lowercase()) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// The first `limit` tags of the universe, with `exclude` removed
/// case-insensitively *before* truncation — the excluded tag never costs a
/// slot.
pub fn popular_tags_excluding(posts: &[Post], exclude: &str, limit: usize) -> Vec<String> {
    all_tags(posts)
        .into_iter()
        .filter(|tag| !tag_eq(tag, exclude))
        .take(limit)
        .collect()
}

/// Posts carrying `tag` (case-insensitive membership), in original order.
pub fn posts_by_tag(posts: &[Post], tag: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| tag_eq(t, tag)))
        .cloned()
        .collect()
}
