//! Markdown parser using pulldown-cmark.

use std::path::Path;

use folio_core::ParsedPost;
use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{
    CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html::push_html,
};

use crate::MarkdownRenderer;

/// Markdown parser configured once and shared by reference.
///
/// Raw HTML in the source passes through unchanged, straight quotes,
/// dashes and ellipses are converted to their typographic forms, and bare
/// URLs in text become links.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Create a new markdown parser with default options.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);

        Self { options }
    }

    /// Parse a post source: frontmatter plus Markdown body.
    pub fn parse(&self, content: &str, path: &Path) -> crate::Result<ParsedPost> {
        crate::parse_post(self, content, path)
    }

    /// Render Markdown to an HTML fragment.
    fn render_markdown(&self, content: &str) -> String {
        let parser = TextMergeStream::new(Parser::new_ext(content, self.options));
        let mut html = String::with_capacity(content.len() * 3 / 2);
        push_html(&mut html, autolink(parser).into_iter());
        html
    }
}

/// Turn bare URLs in text into links.
///
/// Text inside links, images and code blocks is left alone.
fn autolink<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);

    let mut depth = 0usize;
    let mut out = Vec::new();

    for event in events {
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => depth += 1,
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }

        match event {
            Event::Text(text) if depth == 0 && finder.links(&text).next().is_some() => {
                for span in finder.spans(&text) {
                    let piece = CowStr::from(span.as_str().to_string());
                    if span.kind().is_some() {
                        out.push(Event::Start(Tag::Link {
                            link_type: LinkType::Autolink,
                            dest_url: piece.clone(),
                            title: CowStr::Borrowed(""),
                            id: CowStr::Borrowed(""),
                        }));
                        out.push(Event::Text(piece));
                        out.push(Event::End(TagEnd::Link));
                    } else {
                        out.push(Event::Text(piece));
                    }
                }
            }
            other => out.push(other),
        }
    }

    out
}

impl MarkdownRenderer for MarkdownParser {
    fn render(&self, markdown: &str) -> String {
        self.render_markdown(markdown)
    }
}
