//! Writing index: one card per post, newest first.

use std::cmp::Reverse;

use folio_core::PostRecord;

use crate::{
    fragments::{ActivePage, tag_chips},
    html::{HtmlGenerator, Result},
};

/// Output file of the writing index, relative to the output directory.
pub const WRITING_PAGE: &str = "writing.html";

/// Order posts by publication date, newest first.
///
/// The sort is stable. Posts whose date cannot be parsed keep their relative
/// order and come after every dated post.
pub fn sort_by_date(posts: &mut [PostRecord]) {
    posts.sort_by_cached_key(|post| Reverse(post.published()));
}

/// Render the summary card for one post.
pub fn post_card_html(post: &PostRecord) -> String {
    format!(
        r#"                <!-- Blog Post -->
                <article class="blog-card">
                    <div class="blog-card-content">
                        <div class="blog-meta">
                            <span>📅 {date}</span>
                            <span>⏱️ {read_time}</span>
                        </div>
                        <h2 class="blog-title">
                            <a href="posts/{slug}">{title}</a>
                        </h2>
                        <p class="blog-excerpt">
                            {excerpt}
                        </p>
                        <div class="blog-tags">
{tags}
                        </div>
                    </div>
                </article>"#,
        date = post.date,
        read_time = post.read_time,
        slug = post.slug,
        title = post.title,
        excerpt = post.excerpt,
        tags = tag_chips(&post.tags, &" ".repeat(28)),
    )
}

impl HtmlGenerator {
    /// Generate the writing index.
    ///
    /// Input order does not matter; posts are sorted here.
    pub fn generate_writing_page(&self, posts: &[PostRecord]) -> Result<String> {
        let mut sorted = posts.to_vec();
        sort_by_date(&mut sorted);

        let cards = sorted
            .iter()
            .map(post_card_html)
            .collect::<Vec<_>>()
            .join("\n\n");

        let ctx = self
            .base_context(ActivePage::Writing)
            .with_var("cards", cards);

        self.render("writing", &ctx)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::config::SiteConfig;

    use super::*;

    fn post(filename: &str, date: &str) -> PostRecord {
        PostRecord {
            title: format!("Title of {filename}"),
            excerpt: format!("About {filename}"),
            date: date.to_string(),
            read_time: "3 min".to_string(),
            tags: vec!["notes".to_string()],
            slug: format!("{filename}.html"),
            filename: filename.to_string(),
        }
    }

    fn slugs(posts: &[PostRecord]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post("march", "2024-03-01"),
            post("january", "2024-01-15"),
            post("february", "2024-02-20"),
        ];
        sort_by_date(&mut posts);

        assert_eq!(
            slugs(&posts),
            ["march.html", "february.html", "january.html"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut posts = vec![
            post("b", "2024-01-01"),
            post("a", "2024-01-01"),
            post("c", "2024-06-01"),
        ];
        sort_by_date(&mut posts);

        assert_eq!(slugs(&posts), ["c.html", "b.html", "a.html"]);
    }

    #[test]
    fn test_sort_undated_last() {
        let mut posts = vec![
            post("undated", "someday"),
            post("old", "2020-01-01"),
            post("empty", ""),
            post("new", "2024-01-01"),
        ];
        sort_by_date(&mut posts);

        assert_eq!(
            slugs(&posts),
            ["new.html", "old.html", "undated.html", "empty.html"]
        );
    }

    #[test]
    fn test_post_card_html() {
        let html = post_card_html(&post("hello", "2024-05-01"));

        assert!(html.contains(r#"<a href="posts/hello.html">Title of hello</a>"#));
        assert!(html.contains("📅 2024-05-01"));
        assert!(html.contains("⏱️ 3 min"));
        assert!(html.contains("About hello"));
        assert!(html.contains(r#"<span class="tag">notes</span>"#));
    }

    #[test]
    fn test_generate_writing_page_order() {
        let generator = HtmlGenerator::new(SiteConfig::default());
        let posts = vec![
            post("march", "2024-03-01"),
            post("january", "2024-01-15"),
            post("february", "2024-02-20"),
        ];
        let html = generator.generate_writing_page(&posts).unwrap();

        let march = html.find("posts/march.html").unwrap();
        let february = html.find("posts/february.html").unwrap();
        let january = html.find("posts/january.html").unwrap();
        assert!(march < february && february < january);
    }

    #[test]
    fn test_writing_page_nav_and_empty_list() {
        let generator = HtmlGenerator::new(SiteConfig::default());
        let html = generator.generate_writing_page(&[]).unwrap();

        assert!(html.contains(r#"<a href="writing.html" class="active">Writing</a>"#));
        assert!(!html.contains("blog-card"));
        assert!(html.contains("<title>Writing - Zeyang Bao</title>"));
    }
}
