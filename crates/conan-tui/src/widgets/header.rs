//! Header bar with the package title, version selector and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

/// Key hint shown on the right side: (key, action)
pub type KeyHint = (&'static str, &'static str);

/// Main header: app title, `name/` + version selector, and key hints
pub struct PageHeader<'a> {
    package_id: &'a str,
    title_prefix: Option<String>,
    version: Option<&'a str>,
    picker_open: bool,
    hints: &'a [KeyHint],
    icons: IconSet,
}

impl<'a> PageHeader<'a> {
    pub fn new(package_id: &'a str, icons: IconSet) -> Self {
        Self {
            package_id,
            title_prefix: None,
            version: None,
            picker_open: false,
            hints: &[],
            icons,
        }
    }

    /// Show `prefix` followed by the version selector
    pub fn with_version(mut self, title_prefix: String, version: &'a str) -> Self {
        self.title_prefix = Some(title_prefix);
        self.version = Some(version);
        self
    }

    pub fn picker_open(mut self, open: bool) -> Self {
        self.picker_open = open;
        self
    }

    pub fn hints(mut self, hints: &'a [KeyHint]) -> Self {
        self.hints = hints;
        self
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.icons.package(), styles::accent()),
            Span::raw(" "),
            Span::styled("ConanCenter", styles::accent_bold()),
            Span::styled(" / ", styles::text_muted()),
        ];

        match (&self.title_prefix, self.version) {
            (Some(prefix), Some(version)) => {
                spans.push(Span::styled(prefix.clone(), styles::text_bright_bold()));
                let selector_style = if self.picker_open {
                    styles::focused_selected()
                } else {
                    styles::accent()
                };
                spans.push(Span::styled(
                    format!("[{} {}]", version, self.icons.dropdown()),
                    selector_style,
                ));
            }
            _ => spans.push(Span::styled(
                self.package_id.to_string(),
                styles::text_secondary(),
            )),
        }

        Line::from(spans)
    }

    fn hints_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for PageHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };
        let title = self.title_line();
        let title_width = title.width() as u16;
        title.render(row, buf);

        // Hints only when they fit next to the title
        let hints = self.hints_line();
        if !self.hints.is_empty() && title_width + 2 + hints.width() as u16 <= row.width {
            hints.right_aligned().render(row, buf);
        }
    }
}
