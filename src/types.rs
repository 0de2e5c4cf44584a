// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: posts, search options and search results.
//!
//! `PostMetadata` is what the loader produces for every markdown file and what
//! every other part of the crate reads. It's rebuilt on each load and never
//! mutated afterwards, so `SearchResult` just borrows it.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Metadata for one markdown post.
///
/// Serialized with camelCase keys so JSON output matches the front-matter
/// spelling (`wordpressUrl`, `featuredImage`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// File stem of the source document.
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub author: String,
    /// Front-matter order, kept for display. Matching ignores order and case.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Explicit legacy path override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordpress_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image_light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image_dark: Option<String>,
    /// Front-matter keys the core doesn't interpret (`securityResearch`,
    /// `caseStudy`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Parse a front-matter date.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a zoneless ISO datetime.
/// Values without an offset are taken as UTC; an explicit offset is kept, so
/// the calendar date stays the one the author wrote.
pub fn parse_post_date(date: &str) -> Option<DateTime<FixedOffset>> {
    let date = date.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt);
    }
    let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
        })?;
    Some(naive.and_utc().fixed_offset())
}

impl PostMetadata {
    /// Publication instant, if `date` parses.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_post_date(&self.date)
    }

    /// Publication instant normalized to UTC.
    pub fn published_utc(&self) -> Option<DateTime<Utc>> {
        self.published_at().map(|dt| dt.with_timezone(&Utc))
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// A post with its markdown body (front-matter stripped).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(flatten)]
    pub metadata: PostMetadata,
    pub content: String,
}

/// Which part of a post contributed to its relevance score.
///
/// Ordering is the display order: title, excerpt, tags, content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Title,
    Excerpt,
    Tags,
    Content,
}

impl MatchedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedField::Title => "title",
            MatchedField::Excerpt => "excerpt",
            MatchedField::Tags => "tags",
            MatchedField::Content => "content",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Free text. Empty with no tag filter yields no results.
    pub query: String,
    /// Restrict to posts carrying at least one of these tags.
    pub tags: Option<Vec<String>>,
    /// Also scan the post body. Requires reading every post file.
    pub include_content: bool,
    /// Truncate after sorting.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_content(mut self, include_content: bool) -> Self {
        self.include_content = include_content;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Tag filter with blank entries removed, or `None` when nothing is left.
    pub(crate) fn tag_filter(&self) -> Option<Vec<String>> {
        let tags: Vec<String> = self
            .tags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(tags)
        }
    }
}

/// One scored post. Borrows the post from the corpus it was scored against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub post: &'a PostMetadata,
    pub relevance_score: f64,
    pub matched_fields: BTreeSet<MatchedField>,
}
