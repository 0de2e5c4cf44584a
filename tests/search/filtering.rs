//! Empty queries and tag filters.

use super::common::{blog_engine, Fixture};
use folio::{MatchedField, SearchOptions, TAG_WEIGHT, TITLE_WEIGHT};

// ============================================================================
// EMPTY QUERY RULE
// ============================================================================

#[test]
fn test_empty_query_without_tags_is_empty() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    assert!(engine.search(&posts, &SearchOptions::new("")).is_empty());
    assert!(engine.search(&posts, &SearchOptions::new(" \t\n ")).is_empty());
}

#[test]
fn test_blank_tag_entries_do_not_count_as_a_filter() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let options = SearchOptions::new("").with_tags(["", "   "]);
    assert!(engine.search(&posts, &options).is_empty());
}

#[test]
fn test_empty_query_with_tags_returns_tagged_posts() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("").with_tags(["REACT"]));

    let order: Vec<&str> = results.iter().map(|r| r.post.slug.as_str()).collect();
    assert_eq!(order, vec!["react-hooks", "react-intro", "rust-web"]);
    for result in &results {
        assert_eq!(result.relevance_score, TAG_WEIGHT);
        assert!(result.matched_fields.contains(&MatchedField::Tags));
    }
}

#[test]
fn test_tag_filter_with_unknown_tag_is_empty() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("react").with_tags(["Cooking"]));
    assert!(results.is_empty());
}

// ============================================================================
// FILTER PLUS QUERY
// ============================================================================

#[test]
fn test_tag_filter_restricts_text_matches() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    // alpha-release mentions rust in its tags but isn't tagged React.
    let results = engine.search(&posts, &SearchOptions::new("rust").with_tags(["react"]));

    assert!(results.iter().all(|r| r.post.has_tag("react")));
    assert!(results.iter().all(|r| r.post.slug != "alpha-release"));
    assert_eq!(results[0].post.slug, "rust-web");
    assert_eq!(
        results[0].relevance_score,
        TAG_WEIGHT + TITLE_WEIGHT + TAG_WEIGHT
    );
}

#[test]
fn test_filter_hit_alone_keeps_post_eligible() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("rust").with_tags(["react"]));

    let order: Vec<&str> = results.iter().map(|r| r.post.slug.as_str()).collect();
    assert_eq!(order, vec!["rust-web", "react-hooks", "react-intro"]);
    assert_eq!(results[1].relevance_score, TAG_WEIGHT);
}

#[test]
fn test_any_filter_tag_admits() {
    let engine = blog_engine();
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("").with_tags(["Meta", "tutorial"]));

    let order: Vec<&str> = results.iter().map(|r| r.post.slug.as_str()).collect();
    assert_eq!(order, vec!["first-post", "react-intro"]);
}

// ============================================================================
// LOADER TAG LOOKUPS
// ============================================================================

#[test]
fn test_posts_by_tag_ignores_case() {
    let fixture = Fixture::blog();
    let loader = fixture.loader();

    let upper: Vec<String> = loader
        .posts_by_tag("JAVASCRIPT")
        .into_iter()
        .map(|p| p.slug)
        .collect();
    let lower: Vec<String> = loader
        .posts_by_tag("javascript")
        .into_iter()
        .map(|p| p.slug)
        .collect();

    assert_eq!(upper, vec!["js-tips"]);
    assert_eq!(upper, lower);
}

#[test]
fn test_all_tags_deduplicated_and_sorted() {
    let fixture = Fixture::blog();
    fixture.add(
        "more-rust",
        &folio::testing::post_source("More Rust", "2024-04-01", "", &["rust", "Meta"], ""),
    );

    let tags = fixture.loader().all_tags();
    let lowered: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    assert_eq!(lowered, vec!["async", "javascript", "meta", "rust"]);
}
