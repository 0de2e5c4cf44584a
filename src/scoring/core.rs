// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every query term is checked as a case-insensitive substring against each
//! field, and each hit adds that field's weight. The weights encode one rule:
//! a title hit outranks an excerpt or tag hit, which outranks a body hit.
//! Spelling the whole title out exactly earns a bonus on top.
//!
//! # Constants
//!
//! | Field       | Weight | Counted                         |
//! |-------------|--------|---------------------------------|
//! | Title       | 10     | once per term                   |
//! | Exact title | +20    | once per query                  |
//! | Excerpt     | 5      | once per term                   |
//! | Tag         | 5      | per matching tag, per term      |
//! | Content     | 1      | once per term, opt-in           |
//!
//! A tag filter hit also adds the tag weight, once per matching filter tag.

use std::collections::BTreeSet;

use crate::types::{MatchedField, PostMetadata, SearchOptions};

/// Weight of a query term found in the title.
pub const TITLE_WEIGHT: f64 = 10.0;

/// Added once when the whole query equals the title.
pub const EXACT_TITLE_BONUS: f64 = 20.0;

/// Weight of a query term found in the excerpt.
pub const EXCERPT_WEIGHT: f64 = 5.0;

/// Weight of a query term found in one tag, and of one tag filter hit.
pub const TAG_WEIGHT: f64 = 5.0;

/// Weight of a query term found in the rendered body.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// A parsed query: lowercase terms plus the lowercase tag filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    terms: Vec<String>,
    phrase: String,
    tag_filter: Option<Vec<String>>,
}

impl Query {
    pub fn parse(options: &SearchOptions) -> Self {
        let terms: Vec<String> = options
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        let phrase = terms.join(" ");
        Self {
            terms,
            phrase,
            tag_filter: options.tag_filter(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// No terms and no tag filter: nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.tag_filter.is_none()
    }

    /// Number of filter tags the post carries, or `None` without a filter.
    fn filter_hits(&self, post: &PostMetadata) -> Option<usize> {
        self.tag_filter.as_ref().map(|filter| {
            filter
                .iter()
                .filter(|wanted| post.tags.iter().any(|t| t.to_lowercase() == **wanted))
                .count()
        })
    }

    /// Whether the tag filter admits this post. Always true without a filter.
    pub fn admits(&self, post: &PostMetadata) -> bool {
        self.filter_hits(post) != Some(0)
    }
}

/// Accumulated score for one post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Score {
    pub value: f64,
    pub fields: BTreeSet<MatchedField>,
}

impl Score {
    fn add(&mut self, field: MatchedField, weight: f64) {
        self.value += weight;
        self.fields.insert(field);
    }
}

/// Score one post. `None` means the post is excluded from results.
///
/// `content` is the rendered body when content search is on and rendering
/// succeeded.
pub fn score_post(post: &PostMetadata, query: &Query, content: Option<&str>) -> Option<Score> {
    let mut score = Score::default();

    match query.filter_hits(post) {
        Some(0) => return None,
        Some(hits) => score.add(MatchedField::Tags, TAG_WEIGHT * hits as f64),
        None => {}
    }

    let title = post.title.to_lowercase();
    let excerpt = post.excerpt.to_lowercase();
    let tags: Vec<String> = post.tags.iter().map(|t| t.to_lowercase()).collect();
    let content = content.map(str::to_lowercase);

    for term in &query.terms {
        if title.contains(term.as_str()) {
            score.add(MatchedField::Title, TITLE_WEIGHT);
        }
        if excerpt.contains(term.as_str()) {
            score.add(MatchedField::Excerpt, EXCERPT_WEIGHT);
        }
        let tag_hits = tags.iter().filter(|t| t.contains(term.as_str())).count();
        if tag_hits > 0 {
            score.add(MatchedField::Tags, TAG_WEIGHT * tag_hits as f64);
        }
        if content.as_deref().is_some_and(|c| c.contains(term.as_str())) {
            score.add(MatchedField::Content, CONTENT_WEIGHT);
        }
    }

    if !query.phrase.is_empty()
        && title.split_whitespace().collect::<Vec<_>>().join(" ") == query.phrase
    {
        score.add(MatchedField::Title, EXACT_TITLE_BONUS);
    }

    if score.fields.is_empty() {
        None
    } else {
        Some(score)
    }
}
