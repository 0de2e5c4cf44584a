// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Post fixtures shared by unit tests, integration tests and benches.
//!
//! Always compiled, hidden from documentation. [`MemorySource`] stands in for
//! a posts directory when a test only cares about scoring.

#![doc(hidden)]

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::search::PostSource;
use crate::types::PostMetadata;

/// Create a post with the given slug, title and tags.
///
/// Excerpt is derived from the title; date is fixed at 2024-01-01.
pub fn make_post(slug: &str, title: &str, tags: &[&str]) -> PostMetadata {
    PostMetadata {
        slug: slug.to_string(),
        title: title.to_string(),
        date: "2024-01-01".to_string(),
        excerpt: format!("Excerpt for {}", title),
        author: "Test Author".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        permalink: None,
        wordpress_url: None,
        featured_image: None,
        featured_image_light: None,
        featured_image_dark: None,
        extra: BTreeMap::new(),
    }
}

/// Create a post with full control over the searchable fields.
pub fn make_post_full(
    slug: &str,
    title: &str,
    excerpt: &str,
    date: &str,
    tags: &[&str],
) -> PostMetadata {
    PostMetadata {
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        ..make_post(slug, title, tags)
    }
}

/// Render a markdown source file with YAML front-matter.
pub fn post_source(title: &str, date: &str, excerpt: &str, tags: &[&str], body: &str) -> String {
    let mut out = String::from("---\n");
    out.push_str(&format!("title: \"{}\"\n", title));
    out.push_str(&format!("date: \"{}\"\n", date));
    out.push_str(&format!("excerpt: \"{}\"\n", excerpt));
    if tags.is_empty() {
        out.push_str("tags: []\n");
    } else {
        out.push_str("tags:\n");
        for tag in tags {
            out.push_str(&format!("  - \"{}\"\n", tag));
        }
    }
    out.push_str("---\n\n");
    out.push_str(body);
    out.push('\n');
    out
}

/// Write `<dir>/<slug>.md` with the given contents.
pub fn write_post(dir: &Path, slug: &str, source: &str) -> io::Result<()> {
    fs::write(dir.join(format!("{}.md", slug)), source)
}

/// In-memory `PostSource`. Posts without registered content fail to render.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    posts: Vec<PostMetadata>,
    contents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new(posts: Vec<PostMetadata>) -> Self {
        Self {
            posts,
            contents: HashMap::new(),
        }
    }

    pub fn with_content(mut self, slug: &str, content: &str) -> Self {
        self.contents.insert(slug.to_string(), content.to_string());
        self
    }
}

impl PostSource for MemorySource {
    fn load_posts(&self) -> Result<Vec<PostMetadata>> {
        Ok(self.posts.clone())
    }

    fn load_content(&self, post: &PostMetadata) -> Result<String> {
        self.contents
            .get(&post.slug)
            .cloned()
            .ok_or_else(|| Error::ContentRender {
                slug: post.slug.clone(),
                message: "no content registered".to_string(),
            })
    }
}
