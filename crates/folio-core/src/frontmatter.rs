//! Frontmatter parsing for post sources.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Frontmatter metadata of a blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFrontmatter {
    /// Post title (required).
    #[serde(default)]
    pub title: String,

    /// Short summary used for the meta description and the index card.
    #[serde(default)]
    pub excerpt: String,

    /// Publication date as authored, e.g. `2024-05-01`.
    #[serde(default)]
    pub date: String,

    /// Free-text reading time label, e.g. `5 min`.
    #[serde(default, rename = "readTime", alias = "read_time")]
    pub read_time: String,

    /// Tags for the post.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    // Closing delimiter must start a line
    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(&format!("\n{delimiter}"))? + 1;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Parse frontmatter from a string.
///
/// A source without a frontmatter block yields the default record and the
/// full content as body; [`PostFrontmatter::validate`] then rejects it for
/// lacking a title.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(PostFrontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((PostFrontmatter::default(), content.to_string()));
    };

    let frontmatter: PostFrontmatter = match format {
        FrontmatterFormat::Yaml if fm_str.is_empty() => PostFrontmatter::default(),
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => parse_toml_frontmatter(fm_str)
            .map_err(|e| CoreError::frontmatter(path, e.to_string()))?,
    };

    Ok((frontmatter, body.to_string()))
}

/// Parse a TOML block, accepting `date` as a native TOML date or a string.
fn parse_toml_frontmatter(fm_str: &str) -> std::result::Result<PostFrontmatter, toml::de::Error> {
    let mut table: toml::Table = toml::from_str(fm_str)?;

    let native_date = match table.get("date") {
        Some(toml::Value::Datetime(date)) => Some(date.to_string()),
        _ => None,
    };
    if let Some(date) = native_date {
        table.insert("date".to_string(), toml::Value::String(date));
    }

    toml::Value::Table(table).try_into()
}

impl PostFrontmatter {
    /// Validate required fields.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::frontmatter(path, "title is required"));
        }
        Ok(())
    }
}

/// Parse an authored date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|d| d.date())
        })
}
