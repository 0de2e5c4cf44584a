// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions from post titles and tags.
//!
//! Lighter than search: no scoring, no content. Candidates are titles first,
//! then tags, each in corpus order (newest post first).
//!
//! **Invariant**: each suggestion appears at most once. Three posts tagged
//! `React` give one `React`. Deduplication ignores case, and the first
//! spelling seen is the one returned.

use std::collections::HashSet;

use crate::types::PostMetadata;

/// Suggestions returned when the caller doesn't ask for a count.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Titles and tags containing `fragment` (any case), deduplicated, at most `limit`.
pub fn suggest(posts: &[PostMetadata], fragment: &str, limit: usize) -> Vec<String> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let titles = posts.iter().map(|p| &p.title);
    let tags = posts.iter().flat_map(|p| p.tags.iter());

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(limit);
    for candidate in titles.chain(tags) {
        let lower = candidate.to_lowercase();
        if lower.contains(&needle) && seen.insert(lower) {
            out.push(candidate.clone());
            if out.len() == limit {
                break;
            }
        }
    }
    out
}
