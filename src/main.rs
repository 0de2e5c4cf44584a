// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use folio::{
    build_rss, post_permalink, safe_blog_post_url, safe_legacy_url, safe_post_url,
    sanitize_url_path, wordpress_permalink, Config, CorpusLoader, SearchEngine, SearchOptions,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn init_tracing(config: &Config) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let loader = CorpusLoader::from_config(&config);

    match cli.command {
        Commands::Search {
            query,
            tags,
            content,
            limit,
        } => {
            let engine = SearchEngine::new(loader);
            let posts = engine.posts().context("Failed to read posts")?;
            let mut options = SearchOptions::new(query.clone()).with_content(content);
            if !tags.is_empty() {
                options = options.with_tags(tags);
            }
            options.limit = limit;
            let results = engine.search(&posts, &options);
            if cli.json {
                print_json(&results)?;
            } else {
                display::print_search_results(&query, &results);
            }
        }
        Commands::Suggest { fragment, limit } => {
            let engine = SearchEngine::new(loader);
            let posts = engine.posts().context("Failed to read posts")?;
            let suggestions = engine.suggest(&posts, &fragment, limit);
            if cli.json {
                print_json(&suggestions)?;
            } else {
                display::print_list("SUGGESTIONS", &suggestions);
            }
        }
        Commands::Tags => {
            let tags = loader.all_tags();
            if cli.json {
                print_json(&tags)?;
            } else {
                display::print_list("TAGS", &tags);
            }
        }
        Commands::List { tag } => {
            let posts = match &tag {
                Some(tag) => loader.posts_by_tag(tag),
                None => loader.list_posts(),
            };
            if cli.json {
                print_json(&posts)?;
            } else {
                let label = tag.map_or_else(|| "POSTS".to_string(), |t| format!("POSTS #{}", t));
                display::print_posts(&label, &posts);
            }
        }
        Commands::Show { slug } => {
            let post = loader
                .get_post(&slug)
                .with_context(|| format!("Failed to load post {:?}", slug))?;
            if cli.json {
                print_json(&post)?;
            } else {
                display::print_posts("POST", std::slice::from_ref(&post.metadata));
                println!();
                println!("{}", post.content);
            }
        }
        Commands::Permalink { slug } => {
            let post = loader
                .get_post(&slug)
                .with_context(|| format!("Failed to load post {:?}", slug))?
                .metadata;
            let report = json!({
                "slug": post_permalink(&post).ok(),
                "postUrl": safe_post_url(&post),
                "blogUrl": safe_blog_post_url(&post),
                "legacyPath": wordpress_permalink(&post),
                "legacyUrl": safe_legacy_url(&post),
            });
            if cli.json {
                print_json(&report)?;
            } else {
                display::print_list(
                    "PERMALINK",
                    &[
                        format!("post    {}", safe_post_url(&post)),
                        format!("blog    {}", safe_blog_post_url(&post)),
                        format!("legacy  {}", safe_legacy_url(&post)),
                    ],
                );
            }
        }
        Commands::Sanitize { url, path } => {
            let sanitized = if path {
                sanitize_url_path(&url)
            } else {
                config.url_policy()?.sanitize(&url)
            };
            if cli.json {
                print_json(&json!({ "input": url, "sanitized": sanitized }))?;
            } else {
                println!("{}", sanitized);
            }
        }
        Commands::Feed { limit } => {
            let mut feed = config.feed.clone();
            if let Some(limit) = limit {
                feed.limit = limit;
            }
            let posts = loader.list_posts();
            print!("{}", build_rss(&posts, &config.site_origin, &feed)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(mut config) => {
            if let Some(dir) = &cli.posts_dir {
                config.posts_dir = dir.clone();
            }
            config
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli, config) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
