//! Build orchestration.
//!
//! Runs the four page builders in a fixed order: posts, writing index,
//! homepage, experience. A missing content source skips its builder; any
//! other failure aborts the build and leaves already written pages in place.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use folio_core::{Config, CoreError, ExperienceData, HomepageData, PostRecord, load_document};
use folio_parser::{MarkdownParser, MarkdownRenderer, ParserError};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    experience::{EXPERIENCE_PAGE, EXPERIENCE_SOURCE},
    home::{HOME_PAGE, HOME_SOURCE},
    html::{HtmlError, HtmlGenerator},
    posts::{POSTS_DIR, check_unique_slugs, compile_post, discover_posts},
    writing::WRITING_PAGE,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document or configuration error.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Post source could not be parsed.
    #[error("parse error: {0}")]
    Parser(#[from] ParserError),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Two post sources map to the same output file.
    #[error("duplicate post slug {slug}: {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of post documents generated.
    pub posts: usize,

    /// Number of top-level pages generated (writing, home, experience).
    pub pages: usize,

    /// Builders skipped because their content source is missing.
    pub skipped: Vec<&'static str>,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder<R = MarkdownParser> {
    generator: HtmlGenerator,
    renderer: R,
    content_dir: PathBuf,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a builder using the default Markdown renderer.
    #[must_use]
    pub fn new(
        config: Config,
        content_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator: HtmlGenerator::new(config.site),
            renderer: MarkdownParser::new(),
            content_dir: content_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl<R: MarkdownRenderer> Builder<R> {
    /// Replace the Markdown renderer.
    #[must_use]
    pub fn with_renderer<T: MarkdownRenderer>(self, renderer: T) -> Builder<T> {
        Builder {
            generator: self.generator,
            renderer,
            content_dir: self.content_dir,
            output_dir: self.output_dir,
        }
    }

    /// Replace the HTML generator, e.g. to use custom templates.
    #[must_use]
    pub fn with_generator(mut self, generator: HtmlGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            content = %self.content_dir.display(),
            output = %self.output_dir.display(),
            "starting build"
        );

        // 1. Posts
        let posts = match self.build_posts()? {
            Some(posts) => {
                stats.posts = posts.len();
                posts
            }
            None => {
                stats.skipped.push("posts");
                Vec::new()
            }
        };

        // 2. Writing index, fed the posts
        self.build_writing_page(&posts)?;
        stats.pages += 1;

        // 3. Homepage
        if self.build_homepage()? {
            stats.pages += 1;
        } else {
            stats.skipped.push("homepage");
        }

        // 4. Experience
        if self.build_experience_page()? {
            stats.pages += 1;
        } else {
            stats.skipped.push("experience");
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            posts = stats.posts,
            pages = stats.pages,
            skipped = ?stats.skipped,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Generate one document per post.
    ///
    /// Returns `None` when the posts directory does not exist.
    fn build_posts(&self) -> Result<Option<Vec<PostRecord>>> {
        info!("building posts");

        let source_dir = self.content_dir.join(POSTS_DIR);
        if !source_dir.is_dir() {
            info!(dir = %source_dir.display(), "no posts directory found, skipping");
            return Ok(None);
        }

        let post_paths = discover_posts(&source_dir)?;
        check_unique_slugs(&post_paths)?;
        info!(count = post_paths.len(), "found posts");

        let mut records = Vec::with_capacity(post_paths.len());
        for post_path in &post_paths {
            let source = fs::read_to_string(&post_path.path)?;
            let compiled = compile_post(&self.generator, &self.renderer, post_path, &source)?;

            self.write_page(&Path::new(POSTS_DIR).join(&post_path.slug), &compiled.html)?;
            info!(file = %post_path.slug, "generated post");

            records.push(compiled.record);
        }

        Ok(Some(records))
    }

    /// Generate the writing index.
    fn build_writing_page(&self, posts: &[PostRecord]) -> Result<()> {
        info!("building writing page");

        let html = self.generator.generate_writing_page(posts)?;
        self.write_page(Path::new(WRITING_PAGE), &html)?;
        info!(file = WRITING_PAGE, "generated page");

        Ok(())
    }

    /// Generate the landing page. Returns `false` if its source is missing.
    fn build_homepage(&self) -> Result<bool> {
        info!("building homepage");

        let source = self.content_dir.join(HOME_SOURCE);
        if !source.is_file() {
            info!(path = %source.display(), "no homepage data found, skipping");
            return Ok(false);
        }

        let data: HomepageData = load_document(&source)?;
        let html = self.generator.generate_homepage(&data)?;
        self.write_page(Path::new(HOME_PAGE), &html)?;
        info!(file = HOME_PAGE, "generated page");

        Ok(true)
    }

    /// Generate the experience page. Returns `false` if its source is missing.
    fn build_experience_page(&self) -> Result<bool> {
        info!("building experience page");

        let source = self.content_dir.join(EXPERIENCE_SOURCE);
        if !source.is_file() {
            info!(path = %source.display(), "no experience data found, skipping");
            return Ok(false);
        }

        let data: ExperienceData = load_document(&source)?;
        let html = self.generator.generate_experience_page(&data)?;
        self.write_page(Path::new(EXPERIENCE_PAGE), &html)?;
        info!(file = EXPERIENCE_PAGE, "generated page");

        Ok(true)
    }

    /// Write a document below the output directory, overwriting any old copy.
    fn write_page(&self, relative: &Path, html: &str) -> Result<PathBuf> {
        let output_path = self.output_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;

        debug!(path = %output_path.display(), bytes = html.len(), "wrote page");
        Ok(output_path)
    }
}
