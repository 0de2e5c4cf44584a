// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Query commands (`search`, `suggest`, `tags`, `list`, `show`) read the posts
//! directory. `permalink` and `sanitize` exercise the URL helpers; `feed`
//! prints RSS. `--json` switches any query command to machine-readable output.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Search and link a markdown blog corpus",
    version
)]
pub struct Cli {
    /// Config file (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Posts directory, overriding config
    #[arg(long, global = true)]
    pub posts_dir: Option<PathBuf>,

    /// Emit JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search posts by title, excerpt, tags and optionally body
    Search {
        /// Search query
        #[arg(default_value = "")]
        query: String,

        /// Restrict to posts with any of these tags (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Also search post bodies
        #[arg(long)]
        content: bool,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Autocomplete suggestions from titles and tags
    Suggest {
        fragment: String,

        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// List every tag
    Tags,

    /// List posts, newest first
    List {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one post by slug
    Show { slug: String },

    /// Print the modern and legacy URLs for a post
    Permalink { slug: String },

    /// Run a URL through the sanitizer
    Sanitize {
        url: String,

        /// Treat the input as a relative path rather than a URL
        #[arg(long)]
        path: bool,
    },

    /// Print an RSS feed of the newest posts
    Feed {
        /// Number of items, overriding config
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
