//! Experience page: work timeline, education and publications.

use folio_core::{
    ExperienceData,
    content::{Education, Job, Publication},
};

use crate::{
    fragments::{ActivePage, tag_chips},
    home::join_items,
    html::{HtmlGenerator, Result},
    template::TemplateContext,
};

/// Output file of the experience page, relative to the output directory.
pub const EXPERIENCE_PAGE: &str = "experience.html";

/// Content document of the experience page, relative to the content directory.
pub const EXPERIENCE_SOURCE: &str = "experiences.yml";

/// `Company • Team • Location`, or `Company • Location` without a team.
fn company_line(job: &Job) -> String {
    match job.team.as_deref().filter(|team| !team.is_empty()) {
        Some(team) => format!("{} • {} • {}", job.company, team, job.location),
        None => format!("{} • {}", job.company, job.location),
    }
}

fn job_html(job: &Job) -> String {
    let tags = match job.tags.as_deref() {
        Some(tags) if !tags.is_empty() => format!(
            "\n                        <div class=\"blog-tags mt-2\">\n{}\n                        </div>",
            tag_chips(tags, &" ".repeat(28))
        ),
        _ => String::new(),
    };

    format!(
        r#"                <div class="timeline-item">
                    <p class="timeline-date">{date}</p>
                    <h3 class="timeline-title">{title}</h3>
                    <p class="timeline-company">{company}</p>
                    <div class="timeline-description">
                        <p>{description}</p>{tags}
                    </div>
                </div>"#,
        date = job.date,
        title = job.title,
        company = company_line(job),
        description = job.description,
    )
}

fn education_html(edu: &Education) -> String {
    format!(
        r#"                <div class="timeline-item">
                    <p class="timeline-date">{}</p>
                    <h3 class="timeline-title">{}</h3>
                    <p class="timeline-company">{}</p>
                    <div class="timeline-description">
                        <p>{}</p>
                    </div>
                </div>"#,
        edu.date, edu.degree, edu.school, edu.description
    )
}

fn publication_html(publication: &Publication) -> String {
    format!(
        r#"                <div class="card">
                    <h3><a href="{}" target="_blank" class="external-link">{}</a></h3>
                    <p class="blog-meta">
                        <span>📅 {}</span>
                        <span>📄 {}</span>
                    </p>
                    <p>{}</p>
                </div>"#,
        publication.link,
        publication.title,
        publication.year,
        publication.venue,
        publication.authors
    )
}

impl HtmlGenerator {
    /// Generate the experience page.
    ///
    /// The publications section is left out entirely when the list is
    /// missing or empty.
    pub fn generate_experience_page(&self, data: &ExperienceData) -> Result<String> {
        let mut ctx = self
            .base_context(ActivePage::Experience)
            .with_var("experience", join_items(&data.experience, job_html, "\n\n"))
            .with_var(
                "education",
                join_items(&data.education, education_html, "\n\n"),
            );

        if let Some(publications) = data.publications.as_deref().filter(|p| !p.is_empty()) {
            let section_ctx = TemplateContext::new()
                .with_var("cards", join_items(publications, publication_html, "\n"));
            ctx.insert("publications", self.render("publications", &section_ctx)?);
        }

        self.render("experience", &ctx)
    }
}
