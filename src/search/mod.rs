// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over a loaded corpus.
//!
//! `SearchEngine` wraps a [`PostSource`]: something that can list posts and
//! render a post body. Searching is split from loading so results can borrow
//! the posts they point at:
//!
//! ```ignore
//! let engine = SearchEngine::new(CorpusLoader::new("posts"));
//! let posts = engine.posts()?;                       // CorpusRead propagates
//! let hits = engine.search(&posts, &SearchOptions::new("rust"));
//! ```
//!
//! Searching itself never fails. With content search on, a post whose body
//! can't be rendered is logged and scored on metadata alone.

mod suggest;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::warn;

pub use suggest::{suggest, DEFAULT_SUGGESTION_LIMIT};

use crate::corpus::{collect_tags, CorpusLoader};
use crate::error::Result;
use crate::scoring::ranking::rank;
use crate::scoring::{score_post, Query};
use crate::types::{PostMetadata, SearchOptions, SearchResult};

/// Where the engine gets posts and their bodies.
pub trait PostSource: Sync {
    /// The whole corpus, newest first. Errors only on total failure.
    fn load_posts(&self) -> Result<Vec<PostMetadata>>;

    /// Plain text of one post's body.
    fn load_content(&self, post: &PostMetadata) -> Result<String>;
}

impl PostSource for CorpusLoader {
    fn load_posts(&self) -> Result<Vec<PostMetadata>> {
        self.try_list_posts()
    }

    fn load_content(&self, post: &PostMetadata) -> Result<String> {
        self.render_content(post)
    }
}

#[derive(Debug, Clone)]
pub struct SearchEngine<S> {
    source: S,
}

impl<S: PostSource> SearchEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the corpus to search against.
    pub fn posts(&self) -> Result<Vec<PostMetadata>> {
        self.source.load_posts()
    }

    fn score_one<'a>(
        &self,
        post: &'a PostMetadata,
        query: &Query,
        include_content: bool,
    ) -> Option<SearchResult<'a>> {
        // Skip the body read for posts the tag filter rejects anyway.
        if !query.admits(post) {
            return None;
        }
        let content = if include_content {
            match self.source.load_content(post) {
                Ok(content) => Some(content),
                Err(e) => {
                    warn!(slug = %post.slug, error = %e, "skipping content match");
                    None
                }
            }
        } else {
            None
        };
        score_post(post, query, content.as_deref()).map(|score| SearchResult {
            post,
            relevance_score: score.value,
            matched_fields: score.fields,
        })
    }

    /// Score, rank and truncate.
    pub fn search<'a>(
        &self,
        posts: &'a [PostMetadata],
        options: &SearchOptions,
    ) -> Vec<SearchResult<'a>> {
        let query = Query::parse(options);
        if query.is_empty() {
            return Vec::new();
        }

        // Body reads dominate content search; metadata-only scoring is cheap.
        #[cfg(feature = "parallel")]
        let scored: Vec<Option<SearchResult<'a>>> = if options.include_content {
            posts
                .par_iter()
                .map(|post| self.score_one(post, &query, true))
                .collect()
        } else {
            posts
                .iter()
                .map(|post| self.score_one(post, &query, false))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let scored: Vec<Option<SearchResult<'a>>> = posts
            .iter()
            .map(|post| self.score_one(post, &query, options.include_content))
            .collect();

        let mut results: Vec<SearchResult<'a>> = scored.into_iter().flatten().collect();
        rank(&mut results, options.limit);
        results
    }

    /// Autocomplete over titles and tags.
    pub fn suggest(&self, posts: &[PostMetadata], fragment: &str, limit: usize) -> Vec<String> {
        suggest(posts, fragment, limit)
    }

    /// Every distinct tag in `posts`.
    pub fn all_tags(&self, posts: &[PostMetadata]) -> Vec<String> {
        collect_tags(posts)
    }
}
