//! Archive grouping: bucketing posts by calendar month.
//!
//! Bucket labels use a fixed English month-name table rather than the system
//! locale. The grouping feeds URL-stable archive pages, so the label for a
//! given month must be identical on every machine that renders the site.
//!
//! Posts with an unparseable date are skipped here and only here — they stay
//! visible in listings, filtering, and tag indexes, they just have no month
//! to live under.

use crate::types::Post;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Locale-independent month names for bucket labels.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One archive bucket: a `"Month Year"` label and its posts, date
/// descending.
#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket {
    pub label: String,
    pub posts: Vec<Post>,
}

/// Group posts into month buckets, most recent month first.
///
/// - Posts are sorted by date descending before bucketing (stable, so
///   same-day posts keep their original relative order).
/// - Bucket order follows first occurrence in that descending pass.
/// - Each bucket's members retain the global date-descending order.
/// - Unparseable dates are skipped, never an error.
///
/// The input is not mutated; buckets hold fresh clones.
pub fn group_by_month(posts: &[Post]) -> Vec<MonthBucket> {
    let mut dated: Vec<(NaiveDate, &Post)> = posts
        .iter()
        .filter_map(|post| parse_date(&post.date).map(|date| (date, post)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut buckets: Vec<MonthBucket> = Vec::new();
    for (date, post) in dated {
        let label = format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year());
        // Sorted descending, so a month's posts are contiguous: a label
        // either matches the last bucket or opens a new one.
        match buckets.last_mut() {
            Some(bucket) if bucket.label == label => bucket.posts.push(post.clone()),
            _ => buckets.push(MonthBucket {
                label,
                posts: vec![post.clone()],
            }),
        }
    }
    buckets
}

/// Parse a post date. Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates,
/// and zone-less `YYYY-MM-DDTHH:MM:SS` timestamps.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
