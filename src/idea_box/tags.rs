//! Tag normalization.
//!
//! Tags arrive from the user as free-form text: `"AI, Tools"`, `"ai tools"` or
//! several separate arguments. They are always reduced to the same shape before
//! being stored:
//!
//! 1. all fragments are joined with a single space
//! 2. commas become spaces
//! 3. the result is split on whitespace
//! 4. each token is trimmed and lowercased, empty tokens are dropped
//! 5. duplicates are removed and the list is sorted
//!
//! Because stored tags are lowercase, every later comparison (filtering,
//! merging, stats) is plain string equality.

use std::collections::BTreeSet;

/// Normalizes user supplied tag fragments into a sorted, deduplicated list.
///
/// ```
/// use idea_box::tags::normalize_tags;
///
/// assert_eq!(normalize_tags(&["AI, Tools", " tools "]), vec!["ai", "tools"]);
/// assert!(normalize_tags(&[" , "]).is_empty());
/// ```
pub fn normalize_tags<I: AsRef<str>>(fragments: &[I]) -> Vec<String> {
    let raw = fragments
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .replace(',', " ");

    raw.split_whitespace()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Merges `extra` into `existing` without re-sorting.
///
/// Existing tags keep their position (lowercased), and only tags not already
/// present are appended, in the order given. Creation-time tags are sorted but
/// merged tags are not; callers that rely on sorted tags after `addtag` will
/// see the difference.
pub fn merge_tags(existing: &[String], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = existing.iter().map(|t| t.to_lowercase()).collect();
    for tag in extra {
        if !merged.contains(tag) {
            merged.push(tag.clone());
        }
    }
    merged
}
