// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing a batch of post files, in parallel when the `parallel` feature is on.
//!
//! Reading and parsing files is embarrassingly parallel. The only constraint is
//! that output order must match input order, because the loader's date sort is
//! stable on enumeration order. Both paths map into an indexed `Vec<Option<_>>`
//! and flatten afterwards, which keeps positions fixed.
//!
//! A file that fails to read or parse is logged and dropped. One bad post never
//! takes the corpus down.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::document::parse_post;
use crate::error::{Error, Result};
use crate::types::{Post, PostMetadata};

/// Read and parse one file.
pub fn load_post_file(path: &Path, default_author: &str) -> Result<Post> {
    let source = fs::read_to_string(path).map_err(|source| Error::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_post(path, &source, default_author)
}

fn load_metadata_lenient(path: &Path, default_author: &str) -> Option<PostMetadata> {
    match load_post_file(path, default_author) {
        Ok(post) => Some(post.metadata),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable post");
            None
        }
    }
}

/// Parse every path, preserving input order and dropping failures.
#[cfg(feature = "parallel")]
pub fn load_metadata(paths: &[PathBuf], default_author: &str) -> Vec<PostMetadata> {
    paths
        .par_iter()
        .map(|path| load_metadata_lenient(path, default_author))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Parse every path, preserving input order and dropping failures.
#[cfg(not(feature = "parallel"))]
pub fn load_metadata(paths: &[PathBuf], default_author: &str) -> Vec<PostMetadata> {
    paths
        .iter()
        .filter_map(|path| load_metadata_lenient(path, default_author))
        .collect()
}
