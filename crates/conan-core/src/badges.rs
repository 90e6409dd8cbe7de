//! Shield badge snippets for a ConanCenter package
//!
//! Every snippet embeds the same `img.shields.io` URL exactly once.

use serde::Serialize;

/// Base of the shield image URL; the package identifier is appended
pub const SHIELD_BASE_URL: &str = "https://img.shields.io/conan/v/";

/// Alt text used by every markup format
pub const BADGE_ALT: &str = "Conan Center";

/// Markup format of a badge snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeFormat {
    #[default]
    Markdown,
    ReStructuredText,
    AsciiDoc,
    Html,
}

impl BadgeFormat {
    /// All formats in tab order
    pub const ALL: [BadgeFormat; 4] = [
        BadgeFormat::Markdown,
        BadgeFormat::ReStructuredText,
        BadgeFormat::AsciiDoc,
        BadgeFormat::Html,
    ];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            BadgeFormat::Markdown => "Markdown",
            BadgeFormat::ReStructuredText => "reStructuredText",
            BadgeFormat::AsciiDoc => "AsciiDoc",
            BadgeFormat::Html => "HTML",
        }
    }

    /// Position in [`BadgeFormat::ALL`]
    pub fn index(&self) -> usize {
        match self {
            BadgeFormat::Markdown => 0,
            BadgeFormat::ReStructuredText => 1,
            BadgeFormat::AsciiDoc => 2,
            BadgeFormat::Html => 3,
        }
    }

    /// Next format, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous format, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Render the snippet for a badge image URL
    pub fn render(&self, url: &str) -> String {
        match self {
            BadgeFormat::Markdown => format!("![{BADGE_ALT}]({url})"),
            BadgeFormat::ReStructuredText => format!(".. image:: {url}   :alt: {BADGE_ALT}"),
            BadgeFormat::AsciiDoc => format!("image:{url} [{BADGE_ALT}]"),
            BadgeFormat::Html => format!("<img alt=\"{BADGE_ALT}\" src=\"{url}\">"),
        }
    }
}

impl std::fmt::Display for BadgeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A copyable badge snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSnippet {
    pub format: BadgeFormat,
    pub text: String,
}

/// Shield image URL for a package identifier
pub fn badge_url(package_id: &str) -> String {
    format!("{SHIELD_BASE_URL}{package_id}")
}

/// The four badge snippets for a package identifier, in tab order
pub fn badge_snippets(package_id: &str) -> [BadgeSnippet; 4] {
    let url = badge_url(package_id);
    BadgeFormat::ALL.map(|format| BadgeSnippet {
        format,
        text: format.render(&url),
    })
}

/// Snippet of a single format
pub fn badge_snippet(package_id: &str, format: BadgeFormat) -> BadgeSnippet {
    BadgeSnippet {
        format,
        text: format.render(&badge_url(package_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_url() {
        assert_eq!(badge_url("zlib"), "https://img.shields.io/conan/v/zlib");
    }

    #[test]
    fn test_exactly_four_snippets_each_embedding_url_once() {
        for id in ["zlib", "openssl", "boost", "a-b_c.d"] {
            let url = badge_url(id);
            let snippets = badge_snippets(id);

            assert_eq!(snippets.len(), 4);
            for snippet in &snippets {
                assert_eq!(
                    snippet.text.matches(url.as_str()).count(),
                    1,
                    "{:?} for {}",
                    snippet.format,
                    id
                );
            }
        }
    }

    #[test]
    fn test_markdown_snippet() {
        let s = badge_snippet("zlib", BadgeFormat::Markdown);
        assert!(s.text.starts_with("![Conan Center]("));
        assert!(s.text.ends_with(')'));
        assert_eq!(
            s.text,
            "![Conan Center](https://img.shields.io/conan/v/zlib)"
        );
    }

    #[test]
    fn test_restructured_text_snippet() {
        let s = badge_snippet("zlib", BadgeFormat::ReStructuredText);
        assert_eq!(
            s.text,
            ".. image:: https://img.shields.io/conan/v/zlib   :alt: Conan Center"
        );
    }

    #[test]
    fn test_asciidoc_snippet() {
        let s = badge_snippet("zlib", BadgeFormat::AsciiDoc);
        assert_eq!(s.text, "image:https://img.shields.io/conan/v/zlib [Conan Center]");
    }

    #[test]
    fn test_html_snippet() {
        let s = badge_snippet("zlib", BadgeFormat::Html);
        assert_eq!(
            s.text,
            r#"<img alt="Conan Center" src="https://img.shields.io/conan/v/zlib">"#
        );
    }

    #[test]
    fn test_snippets_follow_tab_order() {
        let formats: Vec<BadgeFormat> = badge_snippets("fmt").iter().map(|s| s.format).collect();
        assert_eq!(formats, BadgeFormat::ALL.to_vec());
    }

    #[test]
    fn test_format_cycling_wraps() {
        assert_eq!(BadgeFormat::Html.next(), BadgeFormat::Markdown);
        assert_eq!(BadgeFormat::Markdown.prev(), BadgeFormat::Html);
        assert_eq!(BadgeFormat::Markdown.next(), BadgeFormat::ReStructuredText);
    }
}
