//! Body search with `include_content`.
//!
//! A post whose body can't be rendered is still scored on its metadata.

use super::common::{blog_posts, Fixture};
use folio::testing::MemorySource;
use folio::{MatchedField, SearchEngine, SearchOptions, CONTENT_WEIGHT};

#[test]
fn test_content_only_match_needs_include_content() {
    let source = MemorySource::new(blog_posts()).with_content("rust-web", "The borrow checker is your friend.");
    let engine = SearchEngine::new(source);
    let posts = engine.posts().unwrap();

    assert!(engine.search(&posts, &SearchOptions::new("borrow")).is_empty());

    let results = engine.search(&posts, &SearchOptions::new("borrow").with_content(true));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].post.slug, "rust-web");
    assert_eq!(results[0].relevance_score, CONTENT_WEIGHT);
    assert!(results[0].matched_fields.contains(&MatchedField::Content));
}

#[test]
fn test_render_failure_falls_back_to_metadata() {
    // Only one post has a body; the rest fail to render.
    let source = MemorySource::new(blog_posts()).with_content("first-post", "alpha alpha alpha");
    let engine = SearchEngine::new(source);
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("alpha").with_content(true));

    let order: Vec<&str> = results.iter().map(|r| r.post.slug.as_str()).collect();
    assert_eq!(order, vec!["alpha-release", "first-post"]);
    assert!(!results[0].matched_fields.contains(&MatchedField::Content));
    assert!(results[1].matched_fields.contains(&MatchedField::Content));
}

#[test]
fn test_content_search_reads_markdown_from_disk() {
    let fixture = Fixture::blog();
    let engine = SearchEngine::new(fixture.loader());
    let posts = engine.posts().unwrap();

    let results = engine.search(&posts, &SearchOptions::new("pinning").with_content(true));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].post.slug, "async-rust");

    // Matches "blog." only once the emphasis markers are gone.
    let results = engine.search(&posts, &SearchOptions::new("blog.").with_content(true));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].post.slug, "hello-world");
}

#[test]
fn test_deleted_file_skips_content_only() {
    let fixture = Fixture::blog();
    let engine = SearchEngine::new(fixture.loader());
    let posts = engine.posts().unwrap();

    std::fs::remove_file(fixture.dir.path().join("async-rust.md")).unwrap();

    let results = engine.search(&posts, &SearchOptions::new("async").with_content(true));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].post.slug, "async-rust");
    assert!(!results[0].matched_fields.contains(&MatchedField::Content));
}
