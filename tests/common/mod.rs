//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::testing::{make_post_full, post_source, write_post, MemorySource};
use folio::{CorpusLoader, PostMetadata, SearchEngine};
use tempfile::TempDir;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::make_post;

// ============================================================================
// IN-MEMORY CORPORA
// ============================================================================

/// The two-post corpus: one JavaScript tutorial, one security write-up.
pub fn scenario_posts() -> Vec<PostMetadata> {
    vec![
        make_post_full("js-tut", "JavaScript Tutorial", "Learn JS", "2024-02-01", &["JavaScript"]),
        make_post_full("sec-1", "Security Analysis", "Deep dive", "2024-01-01", &["Security"]),
    ]
}

/// A mixed corpus, newest first, with overlapping terms and tags.
pub fn blog_posts() -> Vec<PostMetadata> {
    vec![
        make_post_full(
            "alpha-release",
            "Alpha release notes",
            "What shipped this month",
            "2024-06-01",
            &["Release", "Rust"],
        ),
        make_post_full(
            "first-post",
            "My first post",
            "An alpha look at the blog",
            "2024-05-01",
            &["Meta"],
        ),
        make_post_full(
            "react-hooks",
            "React hooks in depth",
            "useEffect and friends",
            "2024-04-01",
            &["React", "JavaScript"],
        ),
        make_post_full(
            "react-intro",
            "Getting started with React",
            "A gentle post for beginners",
            "2024-03-01",
            &["react", "Tutorial"],
        ),
        make_post_full(
            "rust-web",
            "Rust for web developers",
            "Coming from JavaScript",
            "2024-02-01",
            &["Rust", "React"],
        ),
    ]
}

pub fn blog_engine() -> SearchEngine<MemorySource> {
    SearchEngine::new(MemorySource::new(blog_posts()))
}

pub fn slugs(posts: &[&PostMetadata]) -> Vec<String> {
    posts.iter().map(|p| p.slug.clone()).collect()
}

// ============================================================================
// ON-DISK CORPORA
// ============================================================================

/// A posts directory on disk. Dropping it removes the directory.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Three posts, a draft note and a stray image.
    pub fn blog() -> Self {
        let fixture = Self::empty();
        fixture.add(
            "hello-world",
            &post_source(
                "Hello World",
                "2024-01-15",
                "The first post",
                &["Meta"],
                "# Hello\n\nWelcome to the **blog**.",
            ),
        );
        fixture.add(
            "async-rust",
            &post_source(
                "Async Rust",
                "2024-03-10",
                "Futures and executors",
                &["Rust", "Async"],
                "Pinning is where it gets *interesting*.\n\n```rust\nasync fn run() {}\n```",
            ),
        );
        fixture.add(
            "js-tips",
            &post_source(
                "JavaScript Tips",
                "2024-02-20",
                "Small things that help",
                &["JavaScript"],
                "Prefer `const` over `let`.",
            ),
        );
        std::fs::write(fixture.dir.path().join("notes.txt"), "not a post")
            .expect("Failed to write notes");
        std::fs::write(fixture.dir.path().join("cover.png"), [0u8, 1, 2])
            .expect("Failed to write image");
        fixture
    }

    pub fn add(&self, slug: &str, source: &str) {
        write_post(self.dir.path(), slug, source).expect("Failed to write post");
    }

    pub fn loader(&self) -> CorpusLoader {
        CorpusLoader::new(self.dir.path())
    }
}

/// A loader pointed at a directory that does not exist.
pub fn missing_loader() -> CorpusLoader {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nope");
    CorpusLoader::new(missing)
}
