// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and permalinks for a markdown blog corpus.
//!
//! Posts are `*.md` files with YAML front-matter. The corpus loader turns a
//! directory of them into metadata sorted newest first; the search engine
//! scores that metadata against a query; the permalink helpers turn a post
//! into URLs that are safe to put in a page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus/    │────▶│   search/    │────▶│   api.rs     │
//! │ (load, sort,│     │ (filter,     │     │ (GET params, │
//! │  cache)     │     │  suggest)    │     │  JSON body)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  render.rs  │     │  scoring/    │     │ permalink.rs │──▶ sanitize.rs
//! │ (md → text) │     │ (weights,    │     │ feed.rs      │
//! └─────────────┘     │  ranking)    │     └──────────────┘
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use folio::{CorpusLoader, SearchEngine, SearchOptions};
//!
//! let engine = SearchEngine::new(CorpusLoader::new("posts"));
//! let posts = engine.posts()?;
//! for result in engine.search(&posts, &SearchOptions::new("rust").with_limit(5)) {
//!     println!("{:>5.1} {}", result.relevance_score, result.post.title);
//! }
//! # Ok::<(), folio::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod feed;
pub mod permalink;
pub mod render;
pub mod sanitize;
pub mod scoring;
pub mod search;
pub mod types;

pub mod testing;

pub use api::{handle, ApiResponse, RequestKind, SearchParams};
pub use config::{Config, FeedConfig};
pub use corpus::{collect_tags, sort_newest_first, CorpusCache, CorpusLoader};
pub use error::{Error, Result};
pub use feed::build_rss;
pub use permalink::{
    post_permalink, safe_blog_post_url, safe_legacy_url, safe_post_url, wordpress_permalink,
    BLOG_FALLBACK,
};
pub use render::markdown_to_text;
pub use sanitize::{sanitize_url, sanitize_url_path, UrlPolicy};
pub use scoring::{CONTENT_WEIGHT, EXACT_TITLE_BONUS, EXCERPT_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT};
pub use search::{suggest, PostSource, SearchEngine, DEFAULT_SUGGESTION_LIMIT};
pub use types::{MatchedField, Post, PostMetadata, SearchOptions, SearchResult};
