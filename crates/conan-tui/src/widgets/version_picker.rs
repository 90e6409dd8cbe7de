//! Version selector popup
//!
//! Lists every catalog version in catalog order. The highlighted row follows
//! the cursor; the currently displayed version carries a check mark.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use conan_core::VersionRecord;

use crate::theme::{icons::IconSet, styles};

const MIN_WIDTH: u16 = 20;

pub struct VersionPicker<'a> {
    versions: &'a [VersionRecord],
    selected: usize,
    highlighted: usize,
    icons: IconSet,
}

impl<'a> VersionPicker<'a> {
    pub fn new(
        versions: &'a [VersionRecord],
        selected: usize,
        highlighted: usize,
        icons: IconSet,
    ) -> Self {
        Self {
            versions,
            selected,
            highlighted,
            icons,
        }
    }

    /// Popup rect anchored below the header, clamped to `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let widest = self
            .versions
            .iter()
            .map(|r| r.version.width())
            .max()
            .unwrap_or(0) as u16;
        let width = (widest + 8).max(MIN_WIDTH).min(area.width);
        let height = (self.versions.len() as u16)
            .saturating_add(2)
            .min(area.height.saturating_sub(3))
            .max(3.min(area.height));
        Rect {
            x: area.x + 2.min(area.width.saturating_sub(width)),
            y: area.y + 3.min(area.height.saturating_sub(height)),
            width,
            height,
        }
    }

    /// First visible row so the highlighted one stays on screen
    fn scroll_offset(&self, rows: usize) -> usize {
        if rows == 0 {
            return 0;
        }
        self.highlighted.saturating_sub(rows - 1)
    }
}

impl Widget for VersionPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let block = styles::modal_block("Version");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let rows = usize::from(inner.height);
        let offset = self.scroll_offset(rows);

        for (row, (index, record)) in self
            .versions
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let marker = if index == self.selected {
                self.icons.selected()
            } else {
                " "
            };
            let style = if index == self.highlighted {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            let line = Line::from(vec![
                Span::styled(format!(" {marker} "), styles::status_green()),
                Span::styled(record.version.clone(), style),
            ]);
            line.render(
                Rect {
                    y: inner.y + row as u16,
                    height: 1,
                    ..inner
                },
                buf,
            );
        }
    }
}
