// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for corpus loading, search and URL sanitization.
//!
//! Most of these never reach a caller. Per-post failures are logged and the
//! post is skipped, sanitizer rejections collapse to an empty string, and an
//! invalid slug becomes the `/blog` fallback. The variants that do escape are
//! `CorpusRead` (whole directory unreadable) and the strict single-post errors.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Slug is empty or carries one of `< > " '`.
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    /// The posts directory (or a post file) could not be read at all.
    #[error("failed to read corpus at {}: {source}", path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("post not found: {0}")]
    PostNotFound(String),

    #[error("malformed front-matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },

    #[error("failed to render content for {slug}: {message}")]
    ContentRender { slug: String, message: String },

    #[error("malformed URL {url:?}: {message}")]
    MalformedUrl { url: String, message: String },

    #[error("blocked URL protocol: {0}")]
    DisallowedProtocol(String),

    #[error("path not in allowed prefixes: {0}")]
    DisallowedPath(String),

    #[error("domain not allowed: {0}")]
    DisallowedDomain(String),

    #[error("configuration error: {0}")]
    Config(String),
}
