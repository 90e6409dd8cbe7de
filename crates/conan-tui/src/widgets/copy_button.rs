//! Copy control label
//!
//! Shows the copy icon while idle and "Copied!" while a confirmation is live.

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};

use conan_app::CopyFeedback;

use crate::theme::{icons::IconSet, styles};

/// Text shown after a successful copy
pub const COPIED_LABEL: &str = "Copied!";

pub struct CopyButton {
    feedback: CopyFeedback,
    icons: IconSet,
}

impl CopyButton {
    pub fn new(feedback: CopyFeedback, icons: IconSet) -> Self {
        Self { feedback, icons }
    }

    pub fn label(&self) -> &'static str {
        match self.feedback {
            CopyFeedback::Idle => self.icons.copy(),
            CopyFeedback::Confirmed { .. } => COPIED_LABEL,
        }
    }

    /// Columns the label occupies, padding included
    pub fn width(&self) -> u16 {
        unicode_width::UnicodeWidthStr::width(self.label()) as u16 + 2
    }
}

impl Widget for CopyButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.feedback.is_confirmed() {
            styles::status_green()
        } else {
            styles::accent()
        };
        Span::styled(format!(" {} ", self.label()), style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use conan_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_idle_shows_icon() {
        let mut term = TestTerminal::with_size(12, 1);
        term.render_widget(CopyButton::new(CopyFeedback::Idle, icons()), term.area());

        assert!(term.buffer_contains(icons().copy()));
        assert!(!term.buffer_contains(COPIED_LABEL));
    }

    #[test]
    fn test_confirmed_shows_copied() {
        let mut term = TestTerminal::with_size(12, 1);
        term.render_widget(
            CopyButton::new(CopyFeedback::Confirmed { generation: 3 }, icons()),
            term.area(),
        );

        insta::assert_snapshot!(term.content().trim(), @"Copied!");
    }

    #[test]
    fn test_width_includes_padding() {
        assert_eq!(CopyButton::new(CopyFeedback::Idle, icons()).width(), 3);
        assert_eq!(
            CopyButton::new(CopyFeedback::Confirmed { generation: 1 }, icons()).width(),
            9
        );
    }
}
