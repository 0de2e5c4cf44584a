// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: a directory of markdown posts → `PostMetadata` records.
//!
//! Two failure policies live side by side. Listing is tolerant: an unreadable
//! directory is an empty blog, logged and moved past. Fetching one post is
//! strict: a missing file is a 404 and the caller needs to know. Search sits in
//! between and uses `try_list_posts`, which propagates a directory failure but
//! still drops individual bad files.

pub mod cache;
pub mod document;
pub mod parallel;

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub use cache::CorpusCache;
pub use document::{parse_post, split_front_matter};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::markdown_to_text;
use crate::types::{Post, PostMetadata};

/// Extension of post source files.
pub const POST_EXTENSION: &str = "md";

/// Display name for posts without an `author` key.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone)]
pub struct CorpusLoader {
    posts_dir: PathBuf,
    default_author: String,
    cache: Option<Arc<CorpusCache>>,
}

impl CorpusLoader {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            default_author: DEFAULT_AUTHOR.to_string(),
            cache: None,
        }
    }

    /// Loader for `config.posts_dir`, with a cache when `cache_ttl_secs > 0`.
    pub fn from_config(config: &Config) -> Self {
        let loader = Self::new(&config.posts_dir).with_default_author(&config.default_author);
        match config.cache_ttl() {
            Some(ttl) => loader.with_cache(Arc::new(CorpusCache::new(ttl))),
            None => loader,
        }
    }

    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    pub fn with_cache(mut self, cache: Arc<CorpusCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Markdown files in the posts directory, sorted by file name.
    ///
    /// Hidden files (`.draft.md`) are skipped: their slug starts with a dot and
    /// `get_post` refuses it. Entries that can't be read are logged and skipped.
    fn post_paths(&self) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.posts_dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        dir = %self.posts_dir.display(),
                        error = %e,
                        "skipping unreadable directory entry"
                    );
                    continue;
                }
            };
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if !hidden
                && path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(POST_EXTENSION)
            {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// All posts, newest first. Fails only when the directory can't be read.
    pub fn try_list_posts(&self) -> Result<Vec<PostMetadata>> {
        if let Some(posts) = self.cache.as_ref().and_then(|c| c.get(&self.posts_dir)) {
            return Ok(posts.as_ref().clone());
        }

        let paths = self.post_paths().map_err(|source| Error::CorpusRead {
            path: self.posts_dir.clone(),
            source,
        })?;
        let mut posts = parallel::load_metadata(&paths, &self.default_author);
        sort_newest_first(&mut posts);
        debug!(
            dir = %self.posts_dir.display(),
            files = paths.len(),
            posts = posts.len(),
            "loaded corpus"
        );

        if let Some(cache) = &self.cache {
            cache.put(&self.posts_dir, Arc::new(posts.clone()));
        }
        Ok(posts)
    }

    /// All posts, newest first. An unreadable directory yields an empty list.
    pub fn list_posts(&self) -> Vec<PostMetadata> {
        self.try_list_posts().unwrap_or_else(|e| {
            error!(error = %e, "failed to list posts");
            Vec::new()
        })
    }

    /// Fetch one post with its body.
    pub fn get_post(&self, slug: &str) -> Result<Post> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
            return Err(Error::PostNotFound(slug.to_string()));
        }
        let path = self.posts_dir.join(format!("{}.{}", slug, POST_EXTENSION));
        match fs::read_to_string(&path) {
            Ok(source) => parse_post(&path, &source, &self.default_author),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(Error::PostNotFound(slug.to_string()))
            }
            Err(source) => Err(Error::CorpusRead { path, source }),
        }
    }

    /// Plain text of a post body, for content search.
    pub fn render_content(&self, post: &PostMetadata) -> Result<String> {
        let full = self.get_post(&post.slug).map_err(|e| Error::ContentRender {
            slug: post.slug.clone(),
            message: e.to_string(),
        })?;
        Ok(markdown_to_text(&full.content))
    }

    pub fn all_slugs(&self) -> Vec<String> {
        self.list_posts().into_iter().map(|p| p.slug).collect()
    }

    /// Every distinct tag across the corpus.
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(&self.list_posts())
    }

    /// Posts carrying `tag` (any case), newest first.
    pub fn posts_by_tag(&self, tag: &str) -> Vec<PostMetadata> {
        self.list_posts()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }
}

/// Stable sort by publication instant, descending. Equal instants keep
/// enumeration order.
///
/// Dates are compared as UTC instants, so posts written with different offsets
/// interleave correctly. Missing or unparseable dates sink to the end.
pub fn sort_newest_first(posts: &mut [PostMetadata]) {
    posts.sort_by_cached_key(|p| Reverse(p.published_utc()));
}

/// Distinct tags, deduplicated case-insensitively (first spelling wins) and
/// sorted case-insensitively.
pub fn collect_tags(posts: &[PostMetadata]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags: Vec<String> = posts
        .iter()
        .flat_map(|p| p.tags.iter())
        .filter(|t| !t.trim().is_empty() && seen.insert(t.to_lowercase()))
        .cloned()
        .collect();
    tags.sort_by_key(|t| t.to_lowercase());
    tags
}
