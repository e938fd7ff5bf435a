//! HTML generation from parsed content.
//!
//! [`HtmlGenerator`] owns the page templates and the site settings shared by
//! every page. Each page kind adds its own `generate_*` method in the module
//! that builds it; the post page lives here.

use folio_core::{PostRecord, config::SiteConfig};
use thiserror::Error;
use tracing::debug;

use crate::{
    fragments::{ActivePage, footer, nav, tag_chips},
    template::{Template, TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Left pad applied to every line of a rendered post body.
pub const POST_BODY_INDENT: usize = 16;

/// HTML page generator.
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    site: SiteConfig,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the built-in templates.
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            site,
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(site: SiteConfig, templates: TemplateRegistry) -> Self {
        Self { templates, site }
    }

    /// Register a custom template.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Site settings used by the templates.
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub(crate) fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String> {
        Ok(self.templates.render(name, ctx)?)
    }

    /// Context holding the chrome every page shares.
    pub(crate) fn base_context(&self, active: ActivePage) -> TemplateContext {
        TemplateContext::new()
            .with_var("author", &self.site.author)
            .with_var("path_prefix", active.path_prefix())
            .with_var("nav", nav(active, &self.site.author))
            .with_var(
                "footer",
                footer(&self.site.author, self.site.copyright_year),
            )
    }

    /// Generate the document for a single post.
    ///
    /// `content` is the rendered body, already indented for embedding.
    pub fn generate_post_page(&self, post: &PostRecord, content: &str) -> Result<String> {
        debug!(slug = %post.slug, "generating post page");

        let ctx = self
            .base_context(ActivePage::Post)
            .with_var("title", &post.title)
            .with_var("excerpt", &post.excerpt)
            .with_var("date", &post.date)
            .with_var("read_time", &post.read_time)
            .with_var("tags", tag_chips(&post.tags, &" ".repeat(POST_BODY_INDENT)))
            .with_var("author_bio", &self.site.author_bio)
            .with_var("content", content);

        self.render("post", &ctx)
    }
}

/// Indent every non-empty line of `html` by `width` spaces.
///
/// Empty lines stay empty so the emitted source has no trailing whitespace.
pub fn indent_html(html: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    html.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
