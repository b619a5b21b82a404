//! Listing-page filtering: category and text-search, ANDed.
//!
//! Both filters are deliberately dumb — exact slug equality and
//! case-insensitive substring — because the listing pages promise
//! predictable results, not relevance ranking. Matches keep the input's
//! relative order and the input is never mutated.

use crate::types::Post;

/// The category value that matches every post.
pub const ALL_CATEGORIES: &str = "all";

/// Filter posts by category slug and search text.
///
/// - `category_slug`: [`ALL_CATEGORIES`] matches everything; any other value
///   requires exact `category_slug` equality.
/// - `query`: case-insensitive substring match against title OR excerpt;
///   the empty query matches everything.
///
/// Both conditions must hold. Returns fresh clones in the input's order.
pub fn filter_posts(posts: &[Post], category_slug: &str, query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let in_category =
                category_slug == ALL_CATEGORIES || post.category_slug == category_slug;
            let matches_query = needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle);
            in_category && matches_query
        })
        .cloned()
        .collect()
}

/// Split a listing into its featured post and the remainder.
///
/// The store returns posts date-descending, so the head of the list is the
/// most recent post — that one gets the hero slot, the rest flow into the
/// grid. An empty listing has no featured post, which is valid.
pub fn split_featured(posts: &[Post]) -> (Option<Post>, Vec<Post>) {
    match posts.split_first() {
        Some((featured, rest)) => (Some(featured.clone()), rest.to_vec()),
        None => (None, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{post_in, searchable_post};

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn all_and_empty_query_returns_everything_in_order() {
        let posts = vec![post_in("p1", "design"), post_in("p2", "code")];
        let filtered = filter_posts(&posts, ALL_CATEGORIES, "");
        assert_eq!(ids(&filtered), vec!["p1", "p2"]);
    }

    #[test]
    fn category_requires_exact_slug_equality() {
        let posts = vec![
            post_in("p1", "design"),
            post_in("p2", "code"),
            post_in("p3", "design"),
        ];
        let filtered = filter_posts(&posts, "design", "");
        assert_eq!(ids(&filtered), vec!["p1", "p3"]);

        // No prefix or fuzzy matching
        assert!(filter_posts(&posts, "des", "").is_empty());
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let posts = vec![
            searchable_post("p1", "Designing APIs", "x"),
            searchable_post("p2", "Gardening", "y"),
        ];
        assert_eq!(ids(&filter_posts(&posts, ALL_CATEGORIES, "design")), vec!["p1"]);
        assert_eq!(ids(&filter_posts(&posts, ALL_CATEGORIES, "DESIGN")), vec!["p1"]);
    }

    #[test]
    fn query_matches_excerpt_too() {
        let posts = vec![
            searchable_post("p1", "x", "All about type systems"),
            searchable_post("p2", "y", "Nothing here"),
        ];
        assert_eq!(
            ids(&filter_posts(&posts, ALL_CATEGORIES, "type systems")),
            vec!["p1"]
        );
    }

    #[test]
    fn filters_are_anded() {
        let mut p1 = post_in("p1", "design");
        p1.title = "Color theory".to_string();
        let mut p2 = post_in("p2", "code");
        p2.title = "Color pickers in Rust".to_string();

        let filtered = filter_posts(&[p1, p2], "design", "color");
        assert_eq!(ids(&filtered), vec!["p1"]);
    }

    #[test]
    fn no_match_is_a_valid_empty_result() {
        let posts = vec![post_in("p1", "design")];
        assert!(filter_posts(&posts, "design", "zebra").is_empty());
        assert!(filter_posts(&posts, "music", "").is_empty());
    }

    #[test]
    fn featured_is_the_head_of_the_listing() {
        let posts = vec![post_in("newest", "design"), post_in("older", "code")];
        let (featured, rest) = split_featured(&posts);
        assert_eq!(featured.unwrap().id, "newest");
        assert_eq!(ids(&rest), vec!["older"]);
    }

    #[test]
    fn featured_on_empty_listing_is_none() {
        let (featured, rest) = split_featured(&[]);
        assert!(featured.is_none());
        assert!(rest.is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let posts = vec![post_in("p1", "design"), post_in("p2", "code")];
        let before = posts.clone();
        let _ = filter_posts(&posts, "design", "whatever");
        assert_eq!(posts, before);
    }
}
