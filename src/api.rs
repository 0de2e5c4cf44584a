// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search endpoint contract, minus the HTTP server.
//!
//! A web layer hands over the method and query string and sends back
//! `status` + `body` as JSON. Three request kinds share one endpoint,
//! selected by `type`:
//!
//! | `type`        | Params                         | Body                                        |
//! |---------------|--------------------------------|---------------------------------------------|
//! | `search`      | `q`, `tags`, `content`, `limit`| `results`, `query`, `tags`, `includeContent`, `totalResults` |
//! | `suggestions` | `q`, `limit`                   | `suggestions`, `query`                      |
//! | `tags`        | none                           | `tags`                                      |
//!
//! Every body carries `success`. Failures never leak internals: the caller
//! sees `"Internal server error"` and the real error goes to the log.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::search::{PostSource, SearchEngine, DEFAULT_SUGGESTION_LIMIT};
use crate::types::{SearchOptions, SearchResult};

pub const STATUS_OK: u16 = 200;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestKind {
    #[default]
    Search,
    Suggestions,
    Tags,
}

impl RequestKind {
    /// Unknown values mean a plain search.
    pub fn parse(value: &str) -> Self {
        match value {
            "suggestions" => RequestKind::Suggestions,
            "tags" => RequestKind::Tags,
            _ => RequestKind::Search,
        }
    }
}

/// Parsed query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub tags: Vec<String>,
    pub include_content: bool,
    pub limit: Option<usize>,
    pub kind: RequestKind,
}

impl SearchParams {
    /// Build from decoded key/value pairs. Unknown keys are ignored; a repeated
    /// key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "q" => params.query = value.to_string(),
                "tags" => {
                    params.tags = value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "content" => params.include_content = value == "true",
                "limit" => params.limit = value.trim().parse().ok(),
                "type" => params.kind = RequestKind::parse(value),
                _ => {}
            }
        }
        params
    }

    /// Build from a raw `a=b&c=d` query string (percent-decoded here).
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            query: self.query.clone(),
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            include_content: self.include_content,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Self::internal_error()
            }
        }
    }

    fn failure(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "success": false, "error": message }),
        }
    }

    pub fn internal_error() -> Self {
        Self::failure(STATUS_INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    success: bool,
    results: Vec<SearchResult<'a>>,
    query: &'a str,
    tags: &'a [String],
    include_content: bool,
    total_results: usize,
}

#[derive(Serialize)]
struct SuggestionsBody<'a> {
    success: bool,
    suggestions: Vec<String>,
    query: &'a str,
}

#[derive(Serialize)]
struct TagsBody {
    success: bool,
    tags: Vec<String>,
}

/// Answer one request against `engine`.
pub fn handle<S: PostSource>(
    engine: &SearchEngine<S>,
    method: &str,
    params: &SearchParams,
) -> ApiResponse {
    if method != "GET" {
        return ApiResponse::failure(STATUS_METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE);
    }

    let posts = match engine.posts() {
        Ok(posts) => posts,
        Err(e) => {
            error!(error = %e, "search request failed");
            return ApiResponse::internal_error();
        }
    };

    match params.kind {
        RequestKind::Tags => ApiResponse::json(
            STATUS_OK,
            &TagsBody {
                success: true,
                tags: engine.all_tags(&posts),
            },
        ),
        RequestKind::Suggestions => {
            let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
            ApiResponse::json(
                STATUS_OK,
                &SuggestionsBody {
                    success: true,
                    suggestions: engine.suggest(&posts, &params.query, limit),
                    query: &params.query,
                },
            )
        }
        RequestKind::Search => {
            let results = engine.search(&posts, &params.to_options());
            let total_results = results.len();
            ApiResponse::json(
                STATUS_OK,
                &SearchBody {
                    success: true,
                    results,
                    query: &params.query,
                    tags: &params.tags,
                    include_content: params.include_content,
                    total_results,
                },
            )
        }
    }
}
