//! Sanitizer invariants.

use folio::testing::make_post;
use folio::{safe_blog_post_url, safe_legacy_url, safe_post_url, sanitize_url, sanitize_url_path};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Path-ish strings heavy on slashes, dots and markup.
fn hostile_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "/", "//", ".", "..", "a", "post", "-", "_", "<", ">", "\"", "'", " ", "%2e",
            "script", "\\", "?", "#", "ü", "2024",
        ]),
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn url_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "", "http://", "https://", "javascript:", "data:", "vbscript:", "file://", "//",
        ]),
        "[a-z./<>:]{0,20}",
    )
        .prop_map(|(scheme, rest)| format!("{}{}", scheme, rest))
}

// ============================================================================
// PATH PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: output only contains whitelisted characters.
    #[test]
    fn prop_path_whitelist(input in hostile_path_strategy()) {
        let out = sanitize_url_path(&input);
        prop_assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || "-_./".contains(c)));
    }

    /// Property: no leading/trailing slash, no empty or dot-only segment.
    #[test]
    fn prop_path_segments_clean(input in hostile_path_strategy()) {
        let out = sanitize_url_path(&input);
        if !out.is_empty() {
            prop_assert!(!out.starts_with('/'));
            prop_assert!(!out.ends_with('/'));
            for segment in out.split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert!(!segment.chars().all(|c| c == '.'));
            }
        }
    }

    /// Property: sanitizing twice changes nothing.
    #[test]
    fn prop_path_idempotent(input in ".{0,64}") {
        let once = sanitize_url_path(&input);
        prop_assert_eq!(sanitize_url_path(&once), once);
    }

    /// Property: safe post URLs are never empty and always root-relative.
    #[test]
    fn prop_safe_urls_never_empty(slug in ".{0,24}") {
        let post = make_post(&slug, "T", &[]);
        for url in [safe_post_url(&post), safe_blog_post_url(&post), safe_legacy_url(&post)] {
            prop_assert!(!url.is_empty());
            prop_assert!(url.starts_with('/'));
            prop_assert!(url[1..].split('/').all(|s| !s.chars().all(|c| c == '.')));
        }
    }

    /// Property: anything that survives the URL sanitizer is http(s) or relative.
    #[test]
    fn prop_url_protocol(url in url_strategy()) {
        let out = sanitize_url(&url, "https://example.com", None, None);
        prop_assert!(
            out.is_empty()
                || out.starts_with('/')
                || out.starts_with("http://")
                || out.starts_with("https://"),
            "unexpected output {:?} for {:?}", out, url
        );
        let lower = out.to_lowercase();
        prop_assert!(!lower.starts_with("javascript:"));
        prop_assert!(!lower.starts_with("data:"));
    }
}
