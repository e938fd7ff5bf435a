//! HTML template system for page generation.
//!
//! Page shells are plain strings with `{{ variable }}` placeholders. Repeated
//! items (cards, timeline entries) are built with `format!` and passed in as
//! pre-rendered variables.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Check if a variable exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A simple template that supports variable interpolation.
///
/// Variables are specified as `{{ variable_name }}` in the template string.
/// `{{ variable_name? }}` renders as empty text when the variable is unset.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    ///
    /// Substituted values are never scanned for placeholders themselves.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = if let Some(stripped) = var_name.strip_suffix('?') {
                (stripped, true)
            } else {
                (var_name, false)
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of page templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in page shells.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Template::new("post", POST_TEMPLATE));
        self.register(Template::new("writing", WRITING_TEMPLATE));
        self.register(Template::new("home", HOME_TEMPLATE));
        self.register(Template::new("experience", EXPERIENCE_TEMPLATE));
        self.register(Template::new("publications", PUBLICATIONS_TEMPLATE));
    }

    /// Register a template, replacing any template with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Single blog post. Lives one directory below the site root.
pub const POST_TEMPLATE: &str = r##"<!DOCTYPE HTML>
<html lang="en">

<head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <title>{{ title }} - {{ author }}</title>

    <meta name="author" content="{{ author }}">
    <meta name="description" content="{{ excerpt }}">
    <meta name="viewport" content="width=device-width, initial-scale=1">

    <link rel="shortcut icon" href="{{ path_prefix }}images/favicon/favicon.ico" type="image/x-icon">
    <link rel="stylesheet" type="text/css" href="{{ path_prefix }}stylesheet.css">

    <style>
        .post-content {
            max-width: 700px;
            margin: 0 auto;
            font-size: 1.1rem;
            line-height: 1.8;
        }

        .post-content h2 {
            margin-top: 2.5rem;
            margin-bottom: 1rem;
        }

        .post-content h3 {
            margin-top: 2rem;
            margin-bottom: 0.75rem;
        }

        .post-content p {
            margin-bottom: 1.5rem;
        }

        .post-content ul,
        .post-content ol {
            margin-bottom: 1.5rem;
            margin-left: 2rem;
        }

        .post-content li {
            margin-bottom: 0.5rem;
        }

        .post-content code {
            background: var(--background-color);
            padding: 0.2rem 0.4rem;
            border-radius: 4px;
            font-family: 'Courier New', monospace;
            font-size: 0.9em;
            color: var(--accent-color);
        }

        .post-content pre {
            background: #2d3748;
            color: #e2e8f0;
            padding: 1.5rem;
            border-radius: 8px;
            overflow-x: auto;
            margin-bottom: 1.5rem;
        }

        .post-content pre code {
            background: transparent;
            color: inherit;
            padding: 0;
        }

        .post-content blockquote {
            border-left: 4px solid var(--accent-color);
            padding-left: 1.5rem;
            margin: 2rem 0;
            font-style: italic;
            color: var(--text-light);
        }

        .post-header {
            text-align: center;
            padding: 3rem 0 2rem;
            background: linear-gradient(135deg, #f5f7fa 0%, #ffffff 100%);
        }

        .post-title {
            font-size: 2.5rem;
            margin-bottom: 1rem;
            line-height: 1.2;
        }

        .post-meta-header {
            display: flex;
            gap: 2rem;
            justify-content: center;
            color: var(--text-light);
            font-size: 1rem;
        }

        .author-section {
            display: flex;
            align-items: center;
            gap: 1rem;
            padding: 2rem;
            background: var(--background-color);
            border-radius: 12px;
            margin: 3rem 0;
        }

        .author-info h3 {
            margin-bottom: 0.25rem;
        }

        .author-info p {
            margin-bottom: 0;
            color: var(--text-light);
        }
    </style>
</head>

<body>
{{ nav }}

    <!-- Post Header -->
    <header class="post-header">
        <div class="container content-wrapper">
            <h1 class="post-title">{{ title }}</h1>
            <div class="post-meta-header">
                <span>📅 {{ date }}</span>
                <span>⏱️ {{ read_time }}</span>
                <span>✍️ {{ author }}</span>
            </div>
            <div class="blog-tags mt-2">
{{ tags }}
            </div>
        </div>
    </header>

    <!-- Post Content -->
    <article>
        <div class="container">
            <div class="post-content">

{{ content }}

                <hr style="margin: 3rem 0; border: none; border-top: 1px solid var(--border-color);">

                <div class="author-section">
                    <div class="author-info">
                        <h3>{{ author }}</h3>
                        <p>{{ author_bio }}</p>
                        <div class="social-links" style="margin-top: 1rem;">
                            <a href="{{ path_prefix }}index.html" style="font-size: 0.9rem;">← Back to Home</a>
                            <a href="{{ path_prefix }}writing.html" style="font-size: 0.9rem; margin-left: 1rem;">← All Posts</a>
                        </div>
                    </div>
                </div>

            </div>
        </div>
    </article>

{{ footer }}
</body>

</html>"##;

/// Writing index listing every post.
pub const WRITING_TEMPLATE: &str = r##"<!DOCTYPE HTML>
<html lang="en">

<head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <title>Writing - {{ author }}</title>

    <meta name="author" content="{{ author }}">
    <meta name="description" content="Blog posts and writings by {{ author }} on AI, machine learning, and technology.">
    <meta name="viewport" content="width=device-width, initial-scale=1">

    <link rel="shortcut icon" href="images/favicon/favicon.ico" type="image/x-icon">
    <link rel="stylesheet" type="text/css" href="stylesheet.css">
</head>

<body>
{{ nav }}

    <!-- Page Header -->
    <section class="hero" style="padding: 3rem 0;">
        <div class="container content-wrapper text-center">
            <h1>Writing</h1>
            <p style="font-size: 1.1rem; color: var(--text-light); max-width: 600px; margin: 1rem auto;">
                Thoughts on AI, machine learning, and building intelligent systems
            </p>
        </div>
    </section>

    <!-- Blog Posts -->
    <section>
        <div class="container content-wrapper">
            <div class="blog-grid">

{{ cards }}

            </div>
        </div>
    </section>

    <!-- Call to Action -->
    <section
        style="background: linear-gradient(135deg, var(--primary-color) 0%, var(--accent-color) 100%); color: white;">
        <div class="container content-wrapper text-center">
            <h2 style="color: white;">Stay Updated</h2>
            <p style="font-size: 1.1rem; color: rgba(255, 255, 255, 0.9); margin-bottom: 2rem;">
                Want to be notified when I publish new posts? Follow me on social media or subscribe to my newsletter.
            </p>
            <div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap;">
                <a href="#" class="btn btn-secondary" style="background: white; color: var(--primary-color);">
                    Subscribe to Newsletter
                </a>
                <a href="#" class="btn btn-secondary" style="border-color: white; color: white;">
                    Follow on Twitter
                </a>
            </div>
        </div>
    </section>

{{ footer }}
</body>

</html>"##;

/// Landing page.
pub const HOME_TEMPLATE: &str = r##"<!DOCTYPE HTML>
<html lang="en">

<head>
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
  <title>{{ author }} - {{ tagline }}</title>

  <meta name="author" content="{{ author }}">
  <meta name="description"
    content="{{ description }}">
  <meta name="keywords"
    content="{{ keywords }}">
  <meta name="viewport" content="width=device-width, initial-scale=1">

  <link rel="shortcut icon" href="images/favicon/favicon.ico" type="image/x-icon">
  <link rel="stylesheet" type="text/css" href="stylesheet.css">
</head>

<body>
{{ nav }}

  <!-- Hero Section -->
  <section class="hero">
    <div class="container">
      <div class="hero-content">
        <div class="hero-text">
          <h1>{{ bio_name }}</h1>
          <p class="hero-subtitle">{{ bio_title }}</p>
          <p class="hero-company">{{ bio_company }}</p>
          <p class="hero-bio">
            {{ bio_description }}
          </p>

          <div class="social-links">
{{ social_links }}
          </div>
        </div>

        <div>
          <img src="{{ bio_image }}" alt="{{ bio_name }}" class="profile-image">
        </div>
      </div>
    </div>
  </section>

  <!-- Research Interests -->
  <section>
    <div class="container">
      <h2 class="section-title">Research Interests</h2>
      <div class="interests-grid">
{{ interests }}
      </div>
    </div>
  </section>

  <!-- Featured Work -->
  <section style="background: white;">
    <div class="container">
      <h2 class="section-title">Featured Work</h2>

      <div class="blog-grid">
{{ featured_work }}
      </div>
    </div>
  </section>

  <!-- News & Updates -->
  <section>
    <div class="container content-wrapper">
      <h2 class="section-title">News & Updates</h2>

      <div class="timeline">
{{ news }}
      </div>
    </div>
  </section>

{{ footer }}
</body>

</html>"##;

/// Work history, education and the optional publications block.
pub const EXPERIENCE_TEMPLATE: &str = r##"<!DOCTYPE HTML>
<html lang="en">

<head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <title>Experience - {{ author }}</title>

    <meta name="author" content="{{ author }}">
    <meta name="description"
        content="Professional experience and education of {{ author }}.">
    <meta name="viewport" content="width=device-width, initial-scale=1">

    <link rel="shortcut icon" href="images/favicon/favicon.ico" type="image/x-icon">
    <link rel="stylesheet" type="text/css" href="stylesheet.css">
</head>

<body>
{{ nav }}

    <!-- Page Header -->
    <section class="hero" style="padding: 3rem 0;">
        <div class="container content-wrapper text-center">
            <h1>Professional Experience</h1>
            <p style="font-size: 1.1rem; color: var(--text-light); max-width: 600px; margin: 1rem auto;">
                My journey in AI engineering, from education to building production systems
            </p>
        </div>
    </section>

    <!-- Work Experience -->
    <section>
        <div class="container content-wrapper">
            <h2>Work Experience</h2>

            <div class="timeline">
{{ experience }}
            </div>
        </div>
    </section>

    <!-- Education -->
    <section style="background: white;">
        <div class="container content-wrapper">
            <h2>Education</h2>

            <div class="timeline">
{{ education }}
            </div>
        </div>
    </section>
{{ publications? }}

{{ footer }}
</body>

</html>"##;

/// Publications section of the experience page.
pub const PUBLICATIONS_TEMPLATE: &str = r##"
    <!-- Publications -->
    <section style="background: white;">
        <div class="container content-wrapper">
            <h2>Publications</h2>
            <div class="blog-grid">
{{ cards }}
            </div>
        </div>
    </section>"##;
