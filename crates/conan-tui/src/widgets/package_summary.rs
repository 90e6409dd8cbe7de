//! Package summary card: description, license, downloads, recipe link, labels
//!
//! Every row is optional and only drawn when the page carries it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use conan_core::PageView;

use crate::theme::{icons::IconSet, styles};

pub struct PackageSummary<'a> {
    page: &'a PageView,
    icons: IconSet,
}

impl<'a> PackageSummary<'a> {
    pub fn new(page: &'a PageView, icons: IconSet) -> Self {
        Self { page, icons }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let page = self.page;
        let mut lines = Vec::new();

        if let Some(description) = &page.description {
            lines.push(Line::styled(description.as_str(), styles::text_bright_bold()));
        }

        if let Some(licenses) = &page.license_line {
            lines.push(Line::from(vec![
                Span::styled(format!("{} License: ", self.icons.license()), styles::text_muted()),
                Span::styled(licenses.as_str(), styles::text_primary()),
            ]));
        }

        if let Some(downloads) = page.downloads_line {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} Downloads: ", self.icons.download()),
                    styles::text_muted(),
                ),
                Span::styled(format_thousands(downloads), styles::text_primary()),
            ]));
        }

        if let Some(url) = &page.recipe_url {
            lines.push(Line::from(vec![
                Span::styled(format!("{} Recipe: ", self.icons.link()), styles::text_muted()),
                Span::styled(url.as_str(), styles::link()),
            ]));
        }

        if !page.labels.is_empty() {
            let mut spans = Vec::with_capacity(page.labels.len() * 2);
            for (i, label) in page.labels.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {label} "), styles::label_badge()));
            }
            lines.push(Line::from(spans));
        }

        lines
    }

    /// Rows needed at `width` columns, borders included
    pub fn required_height(&self, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(2)).max(1);
        let rows: usize = self
            .lines()
            .iter()
            .map(|line| {
                let w: usize = line.spans.iter().map(|s| s.content.width()).sum();
                w.div_ceil(inner).max(1)
            })
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// 1234567 -> "1,234,567"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Widget for PackageSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}
