//! End-to-end tests for Folio.
//!
//! These tests build whole sites into temporary directories and inspect the
//! written pages.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use folio_core::Config;
use folio_generator::{BuildError, Builder};
use tempfile::TempDir;

const HELLO: &str = r#"---
title: "Hello"
excerpt: "Intro"
date: 2024-05-01
readTime: "2 min"
tags: [ai]
---

# Hi
"#;

const EXPERIENCE_WITHOUT_PUBLICATIONS: &str = r#"experience:
  - date: 2023 - Present
    title: AI Engineer
    company: Google
    location: Mountain View, CA
    description: Building assistants.
education:
  - date: 2019 - 2021
    degree: M.S. Computer Science
    school: Carnegie Mellon University
    description: Machine learning.
"#;

fn sample_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/site/content")
}

fn write(path: PathBuf, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn build(content_dir: &Path, output_dir: &Path) -> Result<folio_generator::BuildStats, BuildError> {
    Builder::new(Config::default(), content_dir, output_dir).build()
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(path).unwrap()
}

/// Every file below `dir`, keyed by its relative path.
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let relative = path.strip_prefix(dir).unwrap().to_path_buf();
                files.insert(relative, fs::read(&path).unwrap());
            }
        }
    }
    files
}

#[test]
fn test_single_post_site() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(content.path().join("posts/hello.md"), HELLO);

    let stats = build(content.path(), output.path()).unwrap();
    assert_eq!(stats.posts, 1);

    let post = read(output.path().join("posts/hello.html"));
    assert!(post.contains(r#"<h1 class="post-title">Hello</h1>"#));
    assert!(post.contains("<h1>Hi</h1>"));
    assert_eq!(post.matches(r#"<span class="tag">"#).count(), 1);
    assert!(post.contains(r#"<span class="tag">ai</span>"#));

    let index = read(output.path().join("writing.html"));
    assert_eq!(index.matches(r#"<article class="blog-card">"#).count(), 1);
    assert!(index.contains(r#"<a href="posts/hello.html">Hello</a>"#));
}

#[test]
fn test_sample_site_builds() {
    let content = sample_site();
    if !content.exists() {
        // Skip if the demo site is not available
        return;
    }
    let output = TempDir::new().unwrap();

    let stats = build(&content, output.path()).unwrap();
    assert_eq!(stats.posts, 2);
    assert_eq!(stats.pages, 3);
    assert!(stats.skipped.is_empty());

    for page in [
        "index.html",
        "writing.html",
        "experience.html",
        "posts/agents-in-practice.html",
        "posts/notes-on-retrieval.html",
    ] {
        assert!(output.path().join(page).exists(), "missing {page}");
    }

    let index = read(output.path().join("writing.html"));
    let newer = index.find("posts/agents-in-practice.html").unwrap();
    let older = index.find("posts/notes-on-retrieval.html").unwrap();
    assert!(newer < older);

    let experience = read(output.path().join("experience.html"));
    assert!(experience.contains("Google • NotebookLM • Mountain View, CA"));
    assert!(experience.contains("Startup • Remote"));
    assert!(experience.contains("<h2>Publications</h2>"));
    assert!(experience.contains("<span>📅 2023</span>"));
}

#[test]
fn test_builds_are_deterministic() {
    let content = TempDir::new().unwrap();
    write(content.path().join("posts/hello.md"), HELLO);
    write(
        content.path().join("posts/second.md"),
        "---\ntitle: Second\ndate: 2024-05-01\n---\nSame day.\n",
    );
    write(
        content.path().join("experiences.yml"),
        EXPERIENCE_WITHOUT_PUBLICATIONS,
    );

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    build(content.path(), first.path()).unwrap();
    build(content.path(), second.path()).unwrap();

    assert_eq!(snapshot(first.path()), snapshot(second.path()));
}

#[test]
fn test_rebuild_overwrites_in_place() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(content.path().join("posts/hello.md"), HELLO);

    build(content.path(), output.path()).unwrap();
    write(
        content.path().join("posts/hello.md"),
        "---\ntitle: Hello again\n---\nUpdated.\n",
    );
    build(content.path(), output.path()).unwrap();

    let post = read(output.path().join("posts/hello.html"));
    assert!(post.contains("Hello again"));
    assert!(!post.contains("<h1>Hi</h1>"));
}

#[test]
fn test_missing_posts_directory_skips_posts_only() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        content.path().join("experiences.yml"),
        EXPERIENCE_WITHOUT_PUBLICATIONS,
    );

    let stats = build(content.path(), output.path()).unwrap();

    assert_eq!(stats.skipped, ["posts", "homepage"]);
    assert!(output.path().join("experience.html").exists());
    assert!(output.path().join("writing.html").exists());
    assert!(!output.path().join("index.html").exists());
}

#[test]
fn test_publications_section_omitted() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        content.path().join("experiences.yml"),
        EXPERIENCE_WITHOUT_PUBLICATIONS,
    );

    build(content.path(), output.path()).unwrap();

    let experience = read(output.path().join("experience.html"));
    assert!(experience.contains("<h2>Education</h2>"));
    assert!(!experience.contains("Publications"));
    assert!(experience.contains("Google • Mountain View, CA"));
    assert!(!experience.contains("blog-tags"));
}

#[test]
fn test_slug_mapping() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        content.path().join("posts/my-post.md"),
        "---\ntitle: Mine\n---\n",
    );
    write(
        content.path().join("posts/Shouting.MD"),
        "---\ntitle: Loud\n---\n",
    );
    write(content.path().join("posts/readme.txt"), "not a post");

    let stats = build(content.path(), output.path()).unwrap();

    assert_eq!(stats.posts, 2);
    assert!(output.path().join("posts/my-post.html").exists());
    assert!(output.path().join("posts/Shouting.html").exists());
    assert!(!output.path().join("posts/readme.html").exists());
}

#[test]
fn test_active_navigation() {
    let content = sample_site();
    if !content.exists() {
        return;
    }
    let output = TempDir::new().unwrap();
    build(&content, output.path()).unwrap();

    let cases = [
        ("index.html", r#"<a href="index.html" class="active">Home</a>"#),
        (
            "experience.html",
            r#"<a href="experience.html" class="active">Experience</a>"#,
        ),
        (
            "writing.html",
            r#"<a href="writing.html" class="active">Writing</a>"#,
        ),
    ];
    for (page, active) in cases {
        let html = read(output.path().join(page));
        assert_eq!(html.matches(r#"class="active""#).count(), 1, "{page}");
        assert!(html.contains(active), "{page}");
    }

    let post = read(output.path().join("posts/notes-on-retrieval.html"));
    assert!(!post.contains(r#"class="active""#));
    assert!(post.contains(r#"<a href="../writing.html">Writing</a>"#));
}

#[test]
fn test_post_without_title_is_fatal() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        content.path().join("posts/untitled.md"),
        "---\ndate: 2024-01-01\n---\nNo title.\n",
    );

    let err = build(content.path(), output.path()).unwrap_err();

    assert!(matches!(err, BuildError::Parser(_)));
    assert!(!output.path().join("posts/untitled.html").exists());
}

#[test]
fn test_toml_frontmatter_post() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        content.path().join("posts/toml.md"),
        "+++\ntitle = \"From TOML\"\ndate = 2024-02-20\ntags = [\"config\"]\n+++\nBody.\n",
    );

    build(content.path(), output.path()).unwrap();

    let index = read(output.path().join("writing.html"));
    assert!(index.contains(r#"<a href="posts/toml.html">From TOML</a>"#));
    assert!(index.contains(r#"<span class="tag">config</span>"#));
    assert!(index.contains("📅 2024-02-20"));
}

#[test]
fn test_byte_order_mark_post() {
    let content = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        content.path().join("posts/bom.md"),
        "\u{feff}---\ntitle: With BOM\n---\nSee https://example.com today.\n",
    );

    build(content.path(), output.path()).unwrap();

    let post = read(output.path().join("posts/bom.html"));
    assert!(post.contains(r#"<h1 class="post-title">With BOM</h1>"#));
    assert!(post.contains(r#"<a href="https://example.com">https://example.com</a>"#));
}
