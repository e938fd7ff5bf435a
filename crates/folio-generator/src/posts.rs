//! Post discovery and per-post compilation.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use folio_core::{PostPath, PostRecord};
use folio_parser::{MarkdownRenderer, parse_post};
use tracing::debug;

use crate::{
    build::{BuildError, Result},
    html::{HtmlGenerator, POST_BODY_INDENT, indent_html},
};

/// Directory name of posts, both under the content and the output directory.
pub const POSTS_DIR: &str = "posts";

/// A post compiled to its final document.
#[derive(Debug, Clone)]
pub struct CompiledPost {
    /// Metadata for the writing index.
    pub record: PostRecord,

    /// Complete HTML document.
    pub html: String,
}

/// Find every Markdown source directly inside `dir`.
///
/// The result is sorted by file name so repeated runs see the same order.
pub fn discover_posts(dir: &Path) -> Result<Vec<PostPath>> {
    let mut posts = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match PostPath::from_path(&path) {
            Some(post_path) => posts.push(post_path),
            None => debug!(path = %path.display(), "ignoring non-markdown file"),
        }
    }

    posts.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(posts)
}

/// Reject sources that would be written to the same output file.
///
/// Names are compared case-insensitively so the check also holds on
/// case-insensitive file systems.
pub fn check_unique_slugs(posts: &[PostPath]) -> Result<()> {
    let mut seen: HashMap<String, &PathBuf> = HashMap::with_capacity(posts.len());

    for post in posts {
        if let Some(first) = seen.insert(post.slug.to_lowercase(), &post.path) {
            return Err(BuildError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.clone(),
                second: post.path.clone(),
            });
        }
    }

    Ok(())
}

/// Compile one post source into its document and index record.
pub fn compile_post<R>(
    generator: &HtmlGenerator,
    renderer: &R,
    post_path: &PostPath,
    source: &str,
) -> Result<CompiledPost>
where
    R: MarkdownRenderer + ?Sized,
{
    let parsed = parse_post(renderer, source, &post_path.path)?;
    let record = PostRecord::from_frontmatter(parsed.frontmatter, post_path);

    let content = indent_html(&parsed.html, POST_BODY_INDENT);
    let html = generator.generate_post_page(&record, &content)?;

    Ok(CompiledPost { record, html })
}
