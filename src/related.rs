//! Related-post selection.
//!
//! Relevance here is deliberately simple: sharing a category is the only
//! ranking signal, and everything else is stable original order. The listing
//! pages feed candidates in their fetch order (date descending from the
//! store), so "original order" already encodes recency.

use crate::types::Post;

/// Select up to `limit` posts related to `post` from `candidates`.
///
/// Ranking, in order:
///
/// 1. the post itself is excluded by id
/// 2. candidates sharing `category_slug` come first, in original order
/// 3. remaining candidates backfill, in original order, until `limit`
///
/// Never returns duplicates (by id). Returns fewer than `limit` items when
/// the pool is too small — an empty result is valid, not an error.
pub fn select_related(post: &Post, candidates: &[Post], limit: usize) -> Vec<Post> {
    let mut picked: Vec<&Post> = Vec::with_capacity(limit.min(candidates.len()));

    // Same-category pass, then backfill. Both passes walk the candidates in
    // their original order, which keeps the selection stable.
    for candidate in candidates {
        if picked.len() == limit {
            break;
        }
        if candidate.category_slug == post.category_slug
            && candidate.id != post.id
            && !picked.iter().any(|p| p.id == candidate.id)
        {
            picked.push(candidate);
        }
    }
    for candidate in candidates {
        if picked.len() == limit {
            break;
        }
        if candidate.id != post.id && !picked.iter().any(|p| p.id == candidate.id) {
            picked.push(candidate);
        }
    }

    picked.into_iter().cloned().collect()
}
