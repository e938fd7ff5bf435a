//! Landing page: bio, social links, interests, featured work and news.

use folio_core::{
    HomepageData,
    content::{FeaturedWork, NewsItem, ResearchInterest, SocialLink},
};

use crate::{
    fragments::{ActivePage, tag_chips},
    html::{HtmlGenerator, Result},
};

/// Output file of the landing page, relative to the output directory.
pub const HOME_PAGE: &str = "index.html";

/// Content document of the landing page, relative to the content directory.
pub const HOME_SOURCE: &str = "homepage.yml";

fn social_link_html(link: &SocialLink) -> String {
    format!(
        r#"            <a href="{}" class="social-link">{}</a>"#,
        link.url, link.label
    )
}

fn interest_html(interest: &ResearchInterest) -> String {
    format!(
        r#"        <div class="interest-card">
          <h3>{} {}</h3>
          <p>{}</p>
        </div>"#,
        interest.icon, interest.title, interest.description
    )
}

fn featured_work_html(work: &FeaturedWork) -> String {
    format!(
        r#"        <div class="card">
          <h3>{title}</h3>
          <p class="blog-meta">
            <span>📅 {date}</span>
            <span>🏢 {company}</span>
          </p>
          <p>
            {description}
          </p>
          <div class="blog-tags">
{tags}
          </div>
        </div>"#,
        title = work.title,
        date = work.date,
        company = work.company,
        description = work.description,
        tags = tag_chips(&work.tags, "            "),
    )
}

fn news_item_html(item: &NewsItem) -> String {
    format!(
        r#"        <div class="timeline-item">
          <p class="timeline-date">{}</p>
          <h3 class="timeline-title">{}</h3>
          <p class="timeline-description">
            {}
          </p>
        </div>"#,
        item.date, item.title, item.description
    )
}

/// Render each item and join them with `separator`.
pub(crate) fn join_items<T>(items: &[T], render: impl Fn(&T) -> String, separator: &str) -> String {
    items.iter().map(render).collect::<Vec<_>>().join(separator)
}

impl HtmlGenerator {
    /// Generate the landing page.
    pub fn generate_homepage(&self, data: &HomepageData) -> Result<String> {
        let site = self.site();
        let bio = &data.bio;

        let ctx = self
            .base_context(ActivePage::Home)
            .with_var("tagline", &site.tagline)
            .with_var("description", &site.description)
            .with_var("keywords", &site.keywords)
            .with_var("bio_name", &bio.name)
            .with_var("bio_title", &bio.title)
            .with_var("bio_company", &bio.company)
            .with_var("bio_description", &bio.description)
            .with_var("bio_image", &bio.image)
            .with_var(
                "social_links",
                join_items(&data.social_links, social_link_html, "\n"),
            )
            .with_var(
                "interests",
                join_items(&data.research_interests, interest_html, "\n\n"),
            )
            .with_var(
                "featured_work",
                join_items(&data.featured_work, featured_work_html, "\n\n"),
            )
            .with_var("news", join_items(&data.news, news_item_html, "\n\n"));

        self.render("home", &ctx)
    }
}
