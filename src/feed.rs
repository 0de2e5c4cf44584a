// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! RSS 2.0 feed for the newest posts.
//!
//! Item links go through the same safe-URL path as every other post link and
//! are made absolute against the site origin. Text is XML-escaped; nothing
//! from front-matter reaches the document raw.

use url::Url;

use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::permalink::safe_blog_post_url;
use crate::types::PostMetadata;

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the feed. `posts` should already be newest first.
pub fn build_rss(posts: &[PostMetadata], site_origin: &str, config: &FeedConfig) -> Result<String> {
    let origin = Url::parse(site_origin).map_err(|e| Error::MalformedUrl {
        url: site_origin.to_string(),
        message: e.to_string(),
    })?;
    let site_link = origin.as_str().trim_end_matches('/');

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<rss version=\"2.0\">\n<channel>\n");
    xml.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
    xml.push_str(&format!("  <link>{}</link>\n", escape_xml(site_link)));
    xml.push_str(&format!(
        "  <description>{}</description>\n",
        escape_xml(&config.description)
    ));

    for post in posts.iter().take(config.limit) {
        let link = format!("{}{}", site_link, safe_blog_post_url(post));
        xml.push_str("  <item>\n");
        xml.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
        xml.push_str(&format!("    <link>{}</link>\n", escape_xml(&link)));
        xml.push_str(&format!("    <guid>{}</guid>\n", escape_xml(&link)));
        xml.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&post.excerpt)
        ));
        if let Some(date) = post.published_at() {
            xml.push_str(&format!("    <pubDate>{}</pubDate>\n", date.to_rfc2822()));
        }
        for tag in &post.tags {
            xml.push_str(&format!("    <category>{}</category>\n", escape_xml(tag)));
        }
        xml.push_str("  </item>\n");
    }

    xml.push_str("</channel>\n</rss>\n");
    Ok(xml)
}
