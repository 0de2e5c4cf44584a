// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Equal scores keep corpus order, which is newest first,
//! so a tie goes to the more recent post. The sort is stable, which makes the
//! whole search deterministic for an unchanged corpus.

use std::cmp::Ordering;

use crate::types::SearchResult;

/// Compare two results: score descending. Ties compare equal.
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.relevance_score.total_cmp(&a.relevance_score)
}

/// Stable sort, then truncate to `limit`.
pub fn rank(results: &mut Vec<SearchResult<'_>>, limit: Option<usize>) {
    results.sort_by(compare_results);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
}
