//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default name of the configuration file under the site root.
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide configuration used by the page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site owner, shown in the nav logo, titles and footer.
    #[serde(default = "default_author")]
    pub author: String,

    /// Subtitle appended to the homepage title.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Meta description of the homepage.
    #[serde(default = "default_description")]
    pub description: String,

    /// Meta keywords of the homepage.
    #[serde(default = "default_keywords")]
    pub keywords: String,

    /// Blurb in the author box under every post.
    #[serde(default = "default_author_bio")]
    pub author_bio: String,

    /// Year printed in the footer copyright line.
    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,
}

/// Build layout, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding `posts/`, `homepage.yml` and `experiences.yml`.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Directory receiving the generated pages.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_author() -> String {
    "Zeyang Bao".to_string()
}

fn default_tagline() -> String {
    "AI Engineer at Google".to_string()
}

fn default_description() -> String {
    "Zeyang Bao is an AI Engineer at Google working on the NotebookLM team, focusing on large language models and AI-powered knowledge management.".to_string()
}

fn default_keywords() -> String {
    "Zeyang Bao, AI Engineer, Google, NotebookLM, Machine Learning, LLM, Artificial Intelligence"
        .to_string()
}

fn default_author_bio() -> String {
    "AI Engineer at Google, working on NotebookLM. Passionate about building AI systems that enhance human knowledge and understanding.".to_string()
}

fn default_copyright_year() -> u16 {
    2024
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            tagline: default_tagline(),
            description: default_description(),
            keywords: default_keywords(),
            author_bio: default_author_bio(),
            copyright_year: default_copyright_year(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.author.trim().is_empty() {
            return Err(CoreError::config("site.author cannot be empty"));
        }

        if self.build.content_dir.as_os_str().is_empty() {
            return Err(CoreError::config("build.content_dir cannot be empty"));
        }

        if self.build.output_dir.as_os_str().is_empty() {
            return Err(CoreError::config("build.output_dir cannot be empty"));
        }

        Ok(())
    }

    /// Content directory resolved against the site root.
    pub fn content_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.build.content_dir)
    }

    /// Output directory resolved against the site root.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.build.output_dir)
    }
}
