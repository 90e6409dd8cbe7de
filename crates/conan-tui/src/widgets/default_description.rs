//! Generic description shown for versions without their own description

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use conan_core::DefaultDescription;

use crate::theme::styles;

pub struct DefaultDescriptionView<'a> {
    description: &'a DefaultDescription,
}

impl<'a> DefaultDescriptionView<'a> {
    pub fn new(description: &'a DefaultDescription) -> Self {
        Self { description }
    }
}

impl Widget for DefaultDescriptionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for (i, line) in self.description.lines().into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::styled(line, styles::text_secondary()));
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_package_name() {
        let description = DefaultDescription::new("spdlog");
        let mut term = TestTerminal::with_size(80, 10);
        term.render_widget(DefaultDescriptionView::new(&description), term.area());

        assert!(term.buffer_contains("spdlog is available in ConanCenter"));
    }
}
