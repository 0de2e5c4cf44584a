// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Post permalinks: modern slug paths, legacy date paths, and safe hrefs.
//!
//! Posts are addressed by slug. Posts that predate the slug scheme also keep
//! their old `YYYY/MM/DD/slug` address (or an explicit override) so incoming
//! links still resolve.
//!
//! The `safe_*` functions are what rendering code should call. They never
//! return an empty string: anything that fails validation or sanitizes away
//! becomes [`BLOG_FALLBACK`].

use tracing::warn;

use crate::error::{Error, Result};
use crate::sanitize::sanitize_url_path;
use crate::types::PostMetadata;

/// Where a post link points when its permalink is unusable.
pub const BLOG_FALLBACK: &str = "/blog";

const FORBIDDEN_SLUG_CHARS: [char; 4] = ['<', '>', '"', '\''];

/// The slug, if it's non-empty and free of `< > " '`.
pub fn post_permalink(post: &PostMetadata) -> Result<String> {
    if post.slug.is_empty() || post.slug.contains(FORBIDDEN_SLUG_CHARS) {
        return Err(Error::InvalidSlug(post.slug.clone()));
    }
    Ok(post.slug.clone())
}

/// Legacy address for a post.
///
/// Priority: explicit `permalink` (slashes trimmed, skipped if nothing is
/// left), then `wordpress_url`, then `YYYY/MM/DD/slug` from the post date. An
/// unparseable date falls back to the bare slug.
pub fn wordpress_permalink(post: &PostMetadata) -> String {
    if let Some(permalink) = post
        .permalink
        .as_deref()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
    {
        return permalink.to_string();
    }
    if let Some(url) = post.wordpress_url.as_deref().filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    match post.published_at() {
        Some(date) => format!("{}/{}", date.format("%Y/%m/%d"), post.slug),
        None => {
            warn!(slug = %post.slug, date = %post.date, "unparseable post date for legacy permalink");
            post.slug.clone()
        }
    }
}

fn prefixed_or_fallback(post: &PostMetadata, prefix: &str) -> String {
    let slug = match post_permalink(post) {
        Ok(slug) => slug,
        Err(e) => {
            warn!(error = %e, "falling back to {}", BLOG_FALLBACK);
            return BLOG_FALLBACK.to_string();
        }
    };
    let path = sanitize_url_path(&slug);
    if path.is_empty() {
        warn!(slug = %post.slug, "permalink sanitized to nothing, falling back to {}", BLOG_FALLBACK);
        return BLOG_FALLBACK.to_string();
    }
    format!("{}/{}", prefix, path)
}

/// Root-relative link to a post: `/<slug>`.
pub fn safe_post_url(post: &PostMetadata) -> String {
    prefixed_or_fallback(post, "")
}

/// Link under the blog section: `/blog/<slug>`.
pub fn safe_blog_post_url(post: &PostMetadata) -> String {
    prefixed_or_fallback(post, BLOG_FALLBACK)
}

/// Sanitized legacy address, for redirect tables: `/<legacy path>`.
pub fn safe_legacy_url(post: &PostMetadata) -> String {
    let path = sanitize_url_path(&wordpress_permalink(post));
    if path.is_empty() {
        warn!(slug = %post.slug, "legacy permalink sanitized to nothing, falling back to {}", BLOG_FALLBACK);
        return BLOG_FALLBACK.to_string();
    }
    format!("/{}", path)
}
