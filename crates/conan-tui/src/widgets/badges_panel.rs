//! "Badges" tab: shield preview URL, format tabs, snippet and copy control

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use conan_app::CopyFeedbackSet;
use conan_core::{BadgeFormat, BadgesView};

use super::CopyButton;
use crate::theme::{icons::IconSet, styles};

pub struct BadgesPanel<'a> {
    view: &'a BadgesView,
    active: BadgeFormat,
    feedback: &'a CopyFeedbackSet,
    icons: IconSet,
}

impl<'a> BadgesPanel<'a> {
    pub fn new(
        view: &'a BadgesView,
        active: BadgeFormat,
        feedback: &'a CopyFeedbackSet,
        icons: IconSet,
    ) -> Self {
        Self {
            view,
            active,
            feedback,
            icons,
        }
    }
}

/// One tab per format, the active one highlighted
pub fn format_tab_line(active: BadgeFormat) -> Line<'static> {
    let mut spans = Vec::with_capacity(BadgeFormat::ALL.len() * 2);
    for (i, format) in BadgeFormat::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", styles::text_muted()));
        }
        let style = if *format == active {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        spans.push(Span::styled(format.title(), style));
    }
    Line::from(spans)
}

impl Widget for BadgesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [image_row, _, tabs_row, snippet_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area);

        Line::from(vec![
            Span::styled("Image  ", styles::text_muted()),
            Span::styled(self.view.image_url.as_str(), styles::link()),
        ])
        .render(image_row, buf);

        format_tab_line(self.active).render(tabs_row, buf);

        let snippet = &self.view.snippets[self.active.index()];
        let block = styles::glass_block(true).title(Line::styled(
            format!(" {} ", self.active.title()),
            styles::accent_bold(),
        ));
        Paragraph::new(snippet.text.as_str())
            .style(styles::code())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(snippet_area, buf);

        // Copy control sits on the top border, right-aligned
        let button = CopyButton::new(self.feedback.get(self.active), self.icons);
        let width = button.width().min(snippet_area.width.saturating_sub(2));
        if width > 0 && snippet_area.height > 0 {
            let button_area = Rect {
                x: snippet_area.right().saturating_sub(width + 1),
                y: snippet_area.y,
                width,
                height: 1,
            };
            button.render(button_area, buf);
        }
    }
}
