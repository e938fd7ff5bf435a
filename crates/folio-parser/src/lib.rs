//! Folio Parser Library
//!
//! Turns post sources into frontmatter plus rendered HTML.

pub mod markdown;

use std::path::Path;

use folio_core::{CoreError, ParsedPost};
pub use markdown::MarkdownParser;
use thiserror::Error;

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Frontmatter could not be parsed or validated.
    #[error("{0}")]
    Frontmatter(#[from] CoreError),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Renders a Markdown body to an HTML fragment.
///
/// Implementations must be pure: the same input always yields the same HTML.
pub trait MarkdownRenderer {
    /// Render Markdown text to HTML.
    fn render(&self, markdown: &str) -> String;
}

/// Parse a post source with any renderer.
///
/// Frontmatter handling is fixed; only the body rendering is pluggable.
pub fn parse_post<R>(renderer: &R, content: &str, path: &Path) -> Result<ParsedPost>
where
    R: MarkdownRenderer + ?Sized,
{
    let (frontmatter, body) = folio_core::frontmatter::parse_frontmatter(content, path)?;
    frontmatter.validate(path)?;

    let html = renderer.render(&body);

    Ok(ParsedPost { frontmatter, html })
}
