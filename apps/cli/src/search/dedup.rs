//! URL-based hit deduplication, run once after all queries have been
//! searched. Identity is URL equality only.

use std::collections::HashSet;

use crate::models::posting::SearchHit;

/// Keeps the first occurrence of each URL, preserving first-seen order.
pub fn dedup_hits(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    let mut seen = HashSet::new();
    hits.into_iter()
        .filter(|hit| seen.insert(hit.url.clone()))
        .collect()
}
