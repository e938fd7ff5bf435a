//! Navigation bar and footer shared by every page.

/// Page a navigation bar is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivePage {
    Home,
    Experience,
    Writing,
    /// A single post, one directory below the site root.
    Post,
    /// Any root-level page without its own nav entry.
    None,
}

impl ActivePage {
    /// Resolve a page identifier; anything unrecognized marks no entry active.
    pub fn from_id(id: &str) -> Self {
        match id {
            "home" | "index" => Self::Home,
            "experience" => Self::Experience,
            "writing" => Self::Writing,
            "post" => Self::Post,
            _ => Self::None,
        }
    }

    /// Relative prefix from this page back to the site root.
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::Post => "../",
            _ => "",
        }
    }
}

/// Entries of the navigation bar, in display order.
const NAV_LINKS: [(ActivePage, &str, &str); 3] = [
    (ActivePage::Home, "index.html", "Home"),
    (ActivePage::Experience, "experience.html", "Experience"),
    (ActivePage::Writing, "writing.html", "Writing"),
];

/// Render the site navigation bar.
pub fn nav(active: ActivePage, author: &str) -> String {
    let prefix = active.path_prefix();

    let links = NAV_LINKS
        .iter()
        .map(|(page, href, label)| {
            let class = if *page == active {
                r#" class="active""#
            } else {
                ""
            };
            format!(r#"        <li><a href="{prefix}{href}"{class}>{label}</a></li>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"  <nav>
    <div class="container">
      <div class="logo">{author}</div>
      <ul>
{links}
      </ul>
    </div>
  </nav>"#
    )
}

/// Render the page footer.
pub fn footer(author: &str, year: u16) -> String {
    format!(
        r#"  <footer>
    <div class="container">
      <p>&copy; {year} {author}. All rights reserved.</p>
      <p style="font-size: 0.9rem; margin-top: 0.5rem;">
        Built with HTML & CSS • Hosted on GitHub Pages
      </p>
    </div>
  </footer>"#
    )
}

/// Render tag chips, one per line, each prefixed with `indent`.
///
/// An empty tag list renders as empty text.
pub fn tag_chips(tags: &[String], indent: &str) -> String {
    tags.iter()
        .map(|tag| format!(r#"{indent}<span class="tag">{tag}</span>"#))
        .collect::<Vec<_>>()
        .join("\n")
}
