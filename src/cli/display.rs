// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Theme comes from
//! `FOLIO_THEME` ("dark"/"light"), then `COLORFGBG`, then defaults to dark.
//! Colors are off when stdout isn't a TTY or `NO_COLOR` is set, so piped
//! output is plain text.

use std::sync::OnceLock;

use folio::{safe_blog_post_url, PostMetadata, SearchResult};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut to `max` visible chars with an ellipsis. Plain text only.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn border(s: &str) -> String {
    if use_colors() {
        format!("{}{}{}", GRAY(), s, RESET)
    } else {
        s.to_string()
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn tag_list(tags: &[String]) -> String {
    tags.iter()
        .map(|t| themed(MAGENTA, &[], &format!("#{}", t)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_search_results(query: &str, results: &[SearchResult<'_>]) {
    section_top(&format!("SEARCH \"{}\" · {} results", truncate(query, 40), results.len()));
    for (i, result) in results.iter().enumerate() {
        let fields = result
            .matched_fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        row(&format!(
            "{} {} {}",
            themed(GRAY, &[], &format!("{:>2}.", i + 1)),
            themed(YELLOW, &[BOLD], &format!("{:>5.1}", result.relevance_score)),
            truncate(&result.post.title, 60)
        ));
        row(&format!(
            "          {} {}",
            themed(BLUE, &[], &safe_blog_post_url(result.post)),
            themed(GRAY, &[DIM], &format!("[{}]", fields))
        ));
    }
    if results.is_empty() {
        row(&themed(GRAY, &[DIM], "no matches"));
    }
    section_bot();
}

pub fn print_posts(label: &str, posts: &[PostMetadata]) {
    section_top(&format!("{} · {}", label, posts.len()));
    for post in posts {
        let date = post.date.get(..10).unwrap_or(&post.date);
        row(&format!(
            "{} {}",
            themed(GREEN, &[], &format!("{:<10}", date)),
            truncate(&post.title, 64)
        ));
        if !post.tags.is_empty() {
            row(&format!("           {}", tag_list(&post.tags)));
        }
    }
    section_bot();
}

pub fn print_list(label: &str, items: &[String]) {
    section_top(&format!("{} · {}", label, items.len()));
    for item in items {
        row(&truncate(item, BOX_WIDTH - 2));
    }
    section_bot();
}
