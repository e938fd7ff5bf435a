//! Content types and structures.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    error::{CoreError, Result},
    frontmatter::{PostFrontmatter, parse_date},
};

/// Extension of post sources.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension of generated documents.
pub const HTML_EXTENSION: &str = "html";

/// Location of a post source and the output name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPath {
    /// Original file path.
    pub path: PathBuf,

    /// Base name without extension (`hello` for `hello.md`).
    pub filename: String,

    /// Output file name (`hello.html` for `hello.md`).
    pub slug: String,
}

impl PostPath {
    /// Derive the output identity of a post source.
    ///
    /// Returns `None` for anything that is not a Markdown file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if !extension.eq_ignore_ascii_case(MARKDOWN_EXTENSION) {
            return None;
        }

        let filename = path.file_stem()?.to_str()?.to_string();
        if filename.is_empty() {
            return None;
        }
        let slug = format!("{filename}.{HTML_EXTENSION}");

        Some(Self {
            path: path.to_path_buf(),
            filename,
            slug,
        })
    }
}

/// Parsed post with metadata and rendered HTML body.
#[derive(Debug, Clone)]
pub struct ParsedPost {
    /// Parsed frontmatter metadata.
    pub frontmatter: PostFrontmatter,

    /// Rendered HTML body.
    pub html: String,
}

/// A blog post as listed on the writing index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title.
    pub title: String,

    /// Summary shown on cards and in the meta description.
    pub excerpt: String,

    /// Publication date as authored.
    pub date: String,

    /// Reading time label.
    #[serde(rename = "readTime")]
    pub read_time: String,

    /// Tags in authored order.
    pub tags: Vec<String>,

    /// Output file name, e.g. `hello.html`.
    pub slug: String,

    /// Base name of the source, e.g. `hello`.
    pub filename: String,
}

impl PostRecord {
    /// Combine parsed frontmatter with the identity derived from its path.
    pub fn from_frontmatter(frontmatter: PostFrontmatter, post_path: &PostPath) -> Self {
        Self {
            title: frontmatter.title,
            excerpt: frontmatter.excerpt,
            date: frontmatter.date,
            read_time: frontmatter.read_time,
            tags: frontmatter.tags,
            slug: post_path.slug.clone(),
            filename: post_path.filename.clone(),
        }
    }

    /// Publication date, if the authored value is a recognizable date.
    pub fn published(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Data behind the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageData {
    pub bio: Bio,
    pub social_links: Vec<SocialLink>,
    pub research_interests: Vec<ResearchInterest>,
    pub featured_work: Vec<FeaturedWork>,
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bio {
    pub name: String,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Path of the profile image, relative to the site root.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
    #[serde(alias = "text")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchInterest {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedWork {
    pub title: String,
    pub date: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub title: String,
    pub description: String,
}

/// Data behind the experience page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceData {
    pub experience: Vec<Job>,
    pub education: Vec<Education>,
    #[serde(default)]
    pub publications: Option<Vec<Publication>>,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub date: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub team: Option<String>,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub date: String,
    pub degree: String,
    pub school: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub link: String,
    /// Year as authored; YAML may spell it as a number or a string.
    pub year: String,
    pub venue: String,
    pub authors: String,
}

/// Load a YAML content document into a typed record.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| CoreError::parse(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_path_simple() {
        let pp = PostPath::from_path(Path::new("content/posts/hello.md")).expect("parse path");

        assert_eq!(pp.filename, "hello");
        assert_eq!(pp.slug, "hello.html");
    }

    #[test]
    fn test_post_path_keeps_inner_dots() {
        let pp = PostPath::from_path(Path::new("notes.v2.md")).expect("parse path");
        assert_eq!(pp.filename, "notes.v2");
        assert_eq!(pp.slug, "notes.v2.html");
    }

    #[test]
    fn test_post_path_uppercase_extension() {
        let pp = PostPath::from_path(Path::new("Draft.MD")).expect("parse path");
        assert_eq!(pp.slug, "Draft.html");
    }

    #[test]
    fn test_post_path_rejects_other_files() {
        assert!(PostPath::from_path(Path::new("image.png")).is_none());
        assert!(PostPath::from_path(Path::new("README")).is_none());
    }

    #[test]
    fn test_post_record_from_frontmatter() {
        let fm = PostFrontmatter {
            title: "Hello".to_string(),
            excerpt: "Intro".to_string(),
            date: "2024-05-01".to_string(),
            read_time: "2 min".to_string(),
            tags: vec!["ai".to_string()],
        };
        let pp = PostPath::from_path(Path::new("hello.md")).expect("parse path");
        let record = PostRecord::from_frontmatter(fm, &pp);

        assert_eq!(record.slug, "hello.html");
        assert_eq!(record.filename, "hello");
        assert_eq!(record.published(), NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_experience_optional_fields() {
        let yaml = r#"
experience:
  - date: "2023 - Present"
    title: "AI Engineer"
    company: "Google"
    team: "NotebookLM"
    location: "Mountain View, CA"
    description: "Building things."
    tags: [LLM, Python]
  - date: "2021 - 2023"
    title: "Engineer"
    company: "Startup"
    location: "Remote"
    description: "Shipping things."
education:
  - date: "2019 - 2021"
    degree: "M.S. Computer Science"
    school: "University"
    description: "Studied things."
"#;
        let data: ExperienceData = serde_yaml::from_str(yaml).expect("parse");

        assert_eq!(data.experience[0].team.as_deref(), Some("NotebookLM"));
        assert!(data.experience[1].team.is_none());
        assert!(data.experience[1].tags.is_none());
        assert!(data.publications.is_none());
    }

    #[test]
    fn test_publication_numeric_year() {
        let yaml = r#"
title: "Paper"
link: "https://example.com/paper"
year: 2023
venue: "NeurIPS"
authors: "A. Author, B. Author"
"#;
        let publication: Publication = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(publication.year, "2023");
    }

    #[test]
    fn test_social_link_accepts_text_key() {
        let link: SocialLink =
            serde_yaml::from_str("url: https://github.com/x\ntext: GitHub").expect("parse");
        assert_eq!(link.label, "GitHub");
    }

    #[test]
    fn test_load_document_reports_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("homepage.yml");
        std::fs::write(&path, "bio: [not, a, map").expect("write");

        let err = load_document::<HomepageData>(&path).unwrap_err();
        assert!(err.to_string().contains("homepage.yml"));
    }
}
