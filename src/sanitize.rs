// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! URL and path sanitization for anything that ends up in an `href`.
//!
//! Two tools with different jobs:
//!
//! - [`sanitize_url_path`] is a whitelist filter for relative paths built from
//!   post data. It can't fail; it can only shrink its input, possibly to `""`.
//! - [`UrlPolicy`] vets arbitrary URLs: resolves relative ones against the site
//!   origin, allows only http(s), and optionally restricts same-origin paths to
//!   known prefixes and cross-origin hosts to known domains.
//!
//! Neither uses a backtracking regex. Every step is a single linear pass.
//!
//! **Invariant**: a sanitized path contains only `[A-Za-z0-9-_./]`, has no
//! empty segments, no leading or trailing `/`, and no `.`/`..` segments.

use tracing::{error, warn};
use url::{Position, Url};

use crate::error::{Error, Result};

fn is_safe_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/')
}

/// Dot-only segments (`.`, `..`, `...`) are navigation, never content.
fn is_dot_segment(segment: &str) -> bool {
    segment.bytes().all(|b| b == b'.')
}

/// Whitelist a relative path.
///
/// Drops every character outside `[A-Za-z0-9-_./]`, collapses runs of `/`,
/// removes dot segments and strips leading/trailing slashes. Returns `""`
/// when nothing safe is left.
///
/// ```
/// use folio::sanitize_url_path;
///
/// assert_eq!(sanitize_url_path("//2024//01/<b>post</b>/"), "2024/01/bpost/b");
/// assert_eq!(sanitize_url_path("///../../etc/passwd"), "etc/passwd");
/// assert_eq!(sanitize_url_path("<script>"), "script");
/// assert_eq!(sanitize_url_path("\"'<>"), "");
/// ```
pub fn sanitize_url_path(path: &str) -> String {
    let filtered: String = path.chars().filter(|&c| is_safe_path_char(c)).collect();

    let mut out = String::with_capacity(filtered.len());
    for segment in filtered.split('/') {
        if segment.is_empty() || is_dot_segment(segment) {
            continue;
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(segment);
    }
    out
}

/// Allow-lists for [`UrlPolicy::sanitize`].
///
/// Empty lists mean "allow all" for that dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlPolicy {
    origin: Url,
    path_prefixes: Vec<String>,
    domains: Vec<String>,
}

impl UrlPolicy {
    /// Policy resolving relative URLs against `origin`, with no allow-lists.
    pub fn new(origin: &str) -> Result<Self> {
        let origin = Url::parse(origin).map_err(|e| Error::MalformedUrl {
            url: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            origin,
            path_prefixes: Vec::new(),
            domains: Vec::new(),
        })
    }

    /// Same-origin URLs must have a path starting with one of these.
    pub fn with_path_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Cross-origin URLs must have a host equal to, or a subdomain of, one of these.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains
            .into_iter()
            .map(|d| d.into().trim_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    fn domain_allowed(&self, host: &str) -> bool {
        self.domains.is_empty()
            || self.domains.iter().any(|domain| {
                host == domain
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|rest| rest.ends_with('.'))
            })
    }

    fn path_allowed(&self, path: &str) -> bool {
        self.path_prefixes.is_empty() || self.path_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Vet `raw`, returning the typed reason on rejection.
    ///
    /// Same-origin URLs come back relative (path, query, fragment). Cross-origin
    /// URLs come back absolute and normalized.
    pub fn try_sanitize(&self, raw: &str) -> Result<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::MalformedUrl {
                url: String::new(),
                message: "empty URL".to_string(),
            });
        }

        let url = self.origin.join(raw).map_err(|e| Error::MalformedUrl {
            url: raw.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::DisallowedProtocol(url.scheme().to_string()));
        }

        if url.origin() == self.origin.origin() {
            if !self.path_allowed(url.path()) {
                return Err(Error::DisallowedPath(url.path().to_string()));
            }
            return Ok(url[Position::BeforePath..].to_string());
        }

        let host = url.host_str().unwrap_or_default();
        if !self.domain_allowed(host) {
            return Err(Error::DisallowedDomain(host.to_string()));
        }
        Ok(url.to_string())
    }

    /// Vet `raw`; any rejection is logged and yields `""`.
    pub fn sanitize(&self, raw: &str) -> String {
        match self.try_sanitize(raw) {
            Ok(url) => url,
            Err(e @ Error::MalformedUrl { .. }) => {
                error!(error = %e, "rejected malformed URL");
                String::new()
            }
            Err(Error::DisallowedProtocol(protocol)) => {
                warn!(protocol = %protocol, "blocked URL with disallowed protocol");
                String::new()
            }
            Err(e) => {
                warn!(error = %e, "blocked URL");
                String::new()
            }
        }
    }
}

/// One-shot form of [`UrlPolicy::sanitize`].
///
/// `allowed_path_prefixes` and `allowed_domains` default to "allow all". An
/// unparseable `origin` rejects everything.
pub fn sanitize_url(
    url: &str,
    origin: &str,
    allowed_path_prefixes: Option<&[&str]>,
    allowed_domains: Option<&[&str]>,
) -> String {
    let policy = match UrlPolicy::new(origin) {
        Ok(policy) => policy
            .with_path_prefixes(allowed_path_prefixes.unwrap_or_default().iter().copied())
            .with_domains(allowed_domains.unwrap_or_default().iter().copied()),
        Err(e) => {
            error!(error = %e, "invalid sanitizer origin");
            return String::new();
        }
    };
    policy.sanitize(url)
}
