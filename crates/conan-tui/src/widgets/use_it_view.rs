//! "Use it" tab: pretty-printed consumer snippet or the advisory message

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use conan_core::UseItText;

use crate::theme::{icons::IconSet, styles};

pub struct UseItView<'a> {
    text: &'a UseItText,
    scroll: u16,
    icons: IconSet,
}

impl<'a> UseItView<'a> {
    pub fn new(text: &'a UseItText, icons: IconSet) -> Self {
        Self {
            text,
            scroll: 0,
            icons,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for UseItView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.text {
            UseItText::Preformatted(json) => {
                let text: Text = json
                    .lines()
                    .map(|line| Line::styled(line, styles::code()))
                    .collect();
                Paragraph::new(text)
                    .block(styles::glass_block(false))
                    .scroll((self.scroll, 0))
                    .render(area, buf);
            }
            UseItText::Advisory(message) => {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", self.icons.alert()),
                        styles::status_yellow(),
                    ),
                    Span::styled(message.as_str(), styles::text_secondary()),
                ]);
                Paragraph::new(line)
                    .wrap(Wrap { trim: true })
                    .block(styles::glass_block(false))
                    .render(area, buf);
            }
        }
    }
}
