// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown body → plain searchable text.
//!
//! Content search wants the words a reader sees, not the syntax around them.
//! This is a line-oriented pass: block markers (headings, quotes, list bullets,
//! fences) are stripped per line, then inline syntax (links, images, emphasis,
//! inline HTML) is stripped per character. No HTML is produced.
//!
//! Code inside fences is kept verbatim. People search for identifiers.

/// Strip markdown syntax and collapse whitespace.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            out.push_str(line);
            out.push(' ');
            continue;
        }
        if is_thematic_break(trimmed) {
            continue;
        }
        strip_inline(strip_block_marker(trimmed), &mut out);
        out.push(' ');
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `---`, `***`, `___` on their own line.
fn is_thematic_break(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|&c| line.chars().all(|ch| ch == c || ch == ' '))
}

fn strip_block_marker(line: &str) -> &str {
    let mut rest = line;
    // Nested quotes: "> > text"
    while let Some(r) = rest.strip_prefix('>') {
        rest = r.trim_start();
    }
    if rest.starts_with('#') {
        let r = rest.trim_start_matches('#');
        if r.is_empty() || r.starts_with(' ') {
            return r.trim_start();
        }
    }
    for bullet in ["- ", "* ", "+ "] {
        if let Some(r) = rest.strip_prefix(bullet) {
            return r;
        }
    }
    // Ordered list: "12. text"
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(r) = rest[digits..].strip_prefix(". ") {
            return r;
        }
    }
    rest
}

/// Drop inline markup. Link and image text survives, targets do not.
fn strip_inline(line: &str, out: &mut String) {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' | '`' | '~' => i += 1,
            '!' if chars.get(i + 1) == Some(&'[') => i += 1,
            '[' => i += 1,
            ']' if chars.get(i + 1) == Some(&'(') => {
                // Skip "(target)"; unbalanced parens just end the line.
                match chars[i + 2..].iter().position(|&c| c == ')') {
                    Some(close) => i += close + 3,
                    None => i = chars.len(),
                }
            }
            ']' => i += 1,
            '<' => match chars[i + 1..].iter().position(|&c| c == '>') {
                Some(close) if starts_tag(chars.get(i + 1)) => {
                    out.push(' ');
                    i += close + 2;
                }
                _ => {
                    out.push('<');
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
}

fn starts_tag(next: Option<&char>) -> bool {
    next.is_some_and(|c| c.is_ascii_alphabetic() || *c == '/' || *c == '!')
}
