//! Field weights, ordering and truncation.
//!
//! Title beats excerpt, an exact title beats a partial one, equal scores keep
//! corpus order, and `limit` cuts after sorting.

use super::common::{blog_engine, scenario_posts};
use folio::testing::{make_post_full, MemorySource};
use folio::{
    MatchedField, SearchEngine, SearchOptions, EXACT_TITLE_BONUS, EXCERPT_WEIGHT, TAG_WEIGHT,
    TITLE_WEIGHT,
};

// ============================================================================
// SCENARIO
// ============================================================================

#[test]
fn test_javascript_scenario() {
    let engine = SearchEngine::new(MemorySource::new(scenario_posts()));
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("javascript"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].post.slug, "js-tut");
    assert!(results.iter().all(|r| r.post.slug != "sec-1"));
    assert!(results[0].matched_fields.contains(&MatchedField::Title));
    assert!(results[0].matched_fields.contains(&MatchedField::Tags));
    assert_eq!(results[0].relevance_score, TITLE_WEIGHT + TAG_WEIGHT);
}

// ============================================================================
// FIELD HIERARCHY
// ============================================================================

#[test]
fn test_title_match_ranks_above_excerpt_match() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("Alpha"));

    let order: Vec<&str> = results.iter().map(|r| r.post.slug.as_str()).collect();
    assert_eq!(order, vec!["alpha-release", "first-post"]);
    assert_eq!(results[0].relevance_score, TITLE_WEIGHT);
    assert_eq!(results[1].relevance_score, EXCERPT_WEIGHT);
    assert!(results[1].matched_fields.contains(&MatchedField::Excerpt));
    assert!(!results[1].matched_fields.contains(&MatchedField::Title));
}

#[test]
fn test_exact_title_outranks_partial() {
    let posts = vec![
        make_post_full("longer", "Rust patterns and more", "", "2024-02-01", &[]),
        make_post_full("exact", "Rust Patterns", "", "2024-01-01", &[]),
    ];
    let engine = SearchEngine::new(MemorySource::new(posts));
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("  rust   PATTERNS "));

    assert_eq!(results[0].post.slug, "exact");
    assert_eq!(
        results[0].relevance_score,
        2.0 * TITLE_WEIGHT + EXACT_TITLE_BONUS
    );
    assert_eq!(results[1].relevance_score, 2.0 * TITLE_WEIGHT);
}

#[test]
fn test_multiple_matching_tags_each_count() {
    let posts = vec![make_post_full(
        "tags",
        "Untitled",
        "",
        "2024-01-01",
        &["web", "webassembly", "Rust"],
    )];
    let engine = SearchEngine::new(MemorySource::new(posts));
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("web"));

    assert_eq!(results[0].relevance_score, 2.0 * TAG_WEIGHT);
    assert_eq!(
        results[0].matched_fields.iter().copied().collect::<Vec<_>>(),
        vec![MatchedField::Tags]
    );
}

#[test]
fn test_scores_sum_across_terms() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    // "rust" hits rust-web's title and tag; "javascript" hits its excerpt.
    let results = engine.search(&posts, &SearchOptions::new("rust javascript"));

    let rust_web = results
        .iter()
        .find(|r| r.post.slug == "rust-web")
        .expect("rust-web should match");
    assert_eq!(
        rust_web.relevance_score,
        TITLE_WEIGHT + TAG_WEIGHT + EXCERPT_WEIGHT
    );
    assert_eq!(results[0].post.slug, "rust-web");
}

// ============================================================================
// ORDER AND LIMIT
// ============================================================================

#[test]
fn test_results_sorted_descending() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("react rust post"));

    assert!(results.len() > 2);
    for pair in results.windows(2) {
        assert!(pair[0].relevance_score >= pair[1].relevance_score);
    }
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let posts = vec![
        make_post_full("newest", "Notes on caching", "", "2024-03-01", &[]),
        make_post_full("middle", "More caching notes", "", "2024-02-01", &[]),
        make_post_full("oldest", "Caching, again", "", "2024-01-01", &[]),
    ];
    let engine = SearchEngine::new(MemorySource::new(posts));
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("caching"));

    let order: Vec<&str> = results.iter().map(|r| r.post.slug.as_str()).collect();
    assert_eq!(order, vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_limit_keeps_highest_scored() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let all = engine.search(&posts, &SearchOptions::new("post"));
    assert!(all.len() >= 2);

    let limited = engine.search(&posts, &SearchOptions::new("post").with_limit(1));
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].post.slug, "first-post");
    assert_eq!(limited[0].post.slug, all[0].post.slug);
}

#[test]
fn test_limit_larger_than_results() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("alpha").with_limit(50));
    assert_eq!(results.len(), 2);
}

#[test]
fn test_limit_zero_returns_nothing() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("alpha").with_limit(0));
    assert!(results.is_empty());
}
