//! "Loading..." screen shown until the catalog arrives

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

/// Text shown while the catalog is being fetched
pub const LOADING_TEXT: &str = "Loading...";

pub struct LoadingView<'a> {
    package_id: &'a str,
    error: Option<&'a str>,
    icons: IconSet,
}

impl<'a> LoadingView<'a> {
    pub fn new(package_id: &'a str, icons: IconSet) -> Self {
        Self {
            package_id,
            error: None,
            icons,
        }
    }

    /// Show the last fetch failure under the loading text
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(self.package_id.to_string(), styles::accent_bold())),
            Line::from(""),
            Line::from(Span::styled(LOADING_TEXT, styles::text_secondary())),
        ];

        if let Some(error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", self.icons.alert()), styles::status_red()),
                Span::styled(error.to_string(), styles::status_red()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("press ", styles::text_muted()),
                Span::styled("r", styles::keybinding()),
                Span::styled(" to retry", styles::text_muted()),
            ]));
        }

        lines
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .areas(middle);

        Clear.render(center, buf);
        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(center, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use conan_app::config::IconMode;

    #[test]
    fn test_shows_loading_text() {
        let mut term = TestTerminal::new();
        term.render_widget(
            LoadingView::new("zlib", IconSet::new(IconMode::Unicode)),
            term.area(),
        );

        assert!(term.buffer_contains(LOADING_TEXT));
        assert!(term.buffer_contains("zlib"));
        assert!(!term.buffer_contains("retry"));
    }

    #[test]
    fn test_error_adds_retry_hint() {
        let mut term = TestTerminal::new();
        term.render_widget(
            LoadingView::new("zlib", IconSet::new(IconMode::Unicode)).error(Some("HTTP 404")),
            term.area(),
        );

        assert!(term.buffer_contains(LOADING_TEXT));
        assert!(term.buffer_contains("HTTP 404"));
        assert!(term.buffer_contains("press r to retry"));
    }
}
