// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site configuration.
//!
//! Layered: built-in defaults, then a TOML file, then `FOLIO_*` environment
//! variables. CLI flags are applied last by the binary. Every key is optional
//! in the file.
//!
//! ```toml
//! posts_dir = "content/posts"
//! site_origin = "https://example.com"
//! default_author = "Jane Doe"
//! cache_ttl_secs = 300
//! log_level = "info"
//! allowed_path_prefixes = ["/blog", "/tags"]
//! allowed_domains = ["github.com"]
//!
//! [feed]
//! title = "Jane's blog"
//! description = "Notes on security and systems"
//! limit = 20
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::corpus::DEFAULT_AUTHOR;
use crate::error::{Error, Result};
use crate::sanitize::UrlPolicy;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub posts_dir: PathBuf,
    /// Origin relative URLs resolve against, and the RSS link base.
    pub site_origin: String,
    pub default_author: String,
    /// 0 disables the corpus cache.
    pub cache_ttl_secs: u64,
    pub log_level: String,
    pub allowed_path_prefixes: Vec<String>,
    pub allowed_domains: Vec<String>,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub title: String,
    pub description: String,
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            site_origin: "http://localhost:3000".to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
            cache_ttl_secs: 0,
            log_level: "info".to_string(),
            allowed_path_prefixes: Vec::new(),
            allowed_domains: Vec::new(),
            feed: FeedConfig::default(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: "Latest posts".to_string(),
            limit: 20,
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Defaults → file → environment.
    ///
    /// An explicit `path` must exist. Without one, `folio.toml` in the working
    /// directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `FOLIO_*` variables supplied by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("FOLIO_POSTS_DIR") {
            self.posts_dir = PathBuf::from(dir);
        }
        if let Some(origin) = lookup("FOLIO_SITE_ORIGIN") {
            self.site_origin = origin;
        }
        if let Some(author) = lookup("FOLIO_DEFAULT_AUTHOR") {
            self.default_author = author;
        }
        if let Some(ttl) = lookup("FOLIO_CACHE_TTL_SECS") {
            self.cache_ttl_secs = ttl
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("FOLIO_CACHE_TTL_SECS: not a number: {}", ttl)))?;
        }
        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let origin = Url::parse(&self.site_origin)
            .map_err(|e| Error::Config(format!("site_origin {:?}: {}", self.site_origin, e)))?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "site_origin must be http or https, got {}",
                origin.scheme()
            )));
        }
        if self.default_author.trim().is_empty() {
            return Err(Error::Config("default_author must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }

    /// Sanitizer policy built from the origin and allow-lists.
    pub fn url_policy(&self) -> Result<UrlPolicy> {
        let policy = UrlPolicy::new(&self.site_origin)?
            .with_path_prefixes(self.allowed_path_prefixes.iter().cloned())
            .with_domains(self.allowed_domains.iter().cloned());
        Ok(policy)
    }
}
