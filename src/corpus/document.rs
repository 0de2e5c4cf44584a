// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One markdown file → one `Post`.
//!
//! Front-matter is YAML between two `---` lines at the top of the file. Known
//! keys map onto `PostMetadata`; everything else lands in `extra` untouched.
//! Field parsing is lenient (a numeric title becomes a string, a scalar `tags`
//! becomes a one-element list). Only YAML that doesn't parse at all is an error.

use gray_matter::engine::YAML;
use gray_matter::{Matter, ParsedEntity};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Post, PostMetadata};

/// Front-matter as written in the file. Every field is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    #[serde(default, deserialize_with = "scalar")]
    title: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    date: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    excerpt: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    author: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "scalar")]
    permalink: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    wordpress_url: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    featured_image: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    featured_image_light: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    featured_image_dark: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::Null => Vec::new(),
        other => scalar_to_string(&other).into_iter().collect(),
    })
}

const FENCE: &str = "---";

/// True when `source` opens with a `---` line and closes it further down.
fn has_closed_block(source: &str) -> bool {
    let mut lines = source.lines();
    lines.next().is_some_and(|line| line.trim_end() == FENCE)
        && lines.any(|line| line.trim_end() == FENCE)
}

/// Split `source` into (front-matter YAML, body).
///
/// Returns `Ok(None)` when the file doesn't open with a `---` line or the block
/// is never closed. A byte-order mark in front of the opening line is ignored.
pub fn split_front_matter(path: &Path, source: &str) -> Result<Option<(String, String)>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    if !has_closed_block(source) {
        return Ok(None);
    }

    let parsed: ParsedEntity<Value> = Matter::<YAML>::new()
        .parse(source)
        .map_err(|e| Error::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(Some((parsed.matter, parsed.content)))
}

/// Slug for a post file: its stem.
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

/// Parse a markdown source into a `Post`.
///
/// `path` is used for the slug and for error messages only; nothing is read.
pub fn parse_post(path: &Path, source: &str, default_author: &str) -> Result<Post> {
    let slug = slug_from_path(path).unwrap_or_default();

    let (front, body) = match split_front_matter(path, source)? {
        Some((yaml, body)) if yaml.trim().is_empty() => (FrontMatter::default(), body),
        Some((yaml, body)) => {
            let front: FrontMatter =
                serde_yaml::from_str(&yaml).map_err(|e| Error::FrontMatter {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            (front, body)
        }
        None => (FrontMatter::default(), source.to_string()),
    };

    let metadata = PostMetadata {
        title: front.title.unwrap_or_else(|| slug.clone()),
        date: front.date.unwrap_or_default(),
        excerpt: front.excerpt.unwrap_or_default(),
        author: front
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| default_author.to_string()),
        tags: front.tags,
        permalink: front.permalink,
        wordpress_url: front.wordpress_url,
        featured_image: front.featured_image,
        featured_image_light: front.featured_image_light,
        featured_image_dark: front.featured_image_dark,
        extra: front.extra,
        slug,
    };

    Ok(Post {
        metadata,
        content: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}
