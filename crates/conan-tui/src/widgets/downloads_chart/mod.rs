//! Download history line chart
//!
//! Plots download counts (y) against dates (x, one category per point) in a
//! fixed 40x10 cell canvas placed one cell inside the given area.

mod braille_canvas;

#[cfg(test)]
mod tests;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use conan_core::{DownloadPoint, CHART_MARGIN, CHART_SIZE};

use crate::theme::{palette, styles};
use braille_canvas::BrailleCanvas;

/// Line chart of a version's download history
pub struct DownloadsChart<'a> {
    points: &'a [DownloadPoint],
}

impl<'a> DownloadsChart<'a> {
    pub fn new(points: &'a [DownloadPoint]) -> Self {
        Self { points }
    }

    /// Rows the chart needs including its margin
    pub fn height() -> u16 {
        CHART_SIZE.1 + 2 * CHART_MARGIN
    }

    /// Columns the chart needs including its margin
    pub fn width() -> u16 {
        CHART_SIZE.0 + 2 * CHART_MARGIN
    }
}

/// The fixed canvas inside `area`, clipped when the area is smaller
pub(crate) fn canvas_rect(area: Rect) -> Rect {
    let x = area.x.saturating_add(CHART_MARGIN);
    let y = area.y.saturating_add(CHART_MARGIN);
    Rect {
        x,
        y,
        width: CHART_SIZE
            .0
            .min(area.width.saturating_sub(2 * CHART_MARGIN)),
        height: CHART_SIZE
            .1
            .min(area.height.saturating_sub(2 * CHART_MARGIN)),
    }
}

/// Compact count label: 950, 1.2k, 3.4M
pub(crate) fn format_count(count: i64) -> String {
    let value = count.max(0) as f64;
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{}", count.max(0))
    }
}

impl Widget for DownloadsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let canvas_area = canvas_rect(area);
        if self.points.is_empty() || canvas_area.width < 4 || canvas_area.height < 2 {
            return;
        }

        let max = self.points.iter().map(|p| p.downloads).max().unwrap_or(0).max(1);
        let max_label = format_count(max);
        let y_axis_width = (max_label.len() as u16 + 1).min(canvas_area.width / 2);

        let plot_area = Rect {
            x: canvas_area.x + y_axis_width,
            y: canvas_area.y,
            width: canvas_area.width - y_axis_width,
            height: canvas_area.height - 1,
        };

        // Y-axis: max at the top, zero at the bottom of the plot
        buf.set_stringn(
            canvas_area.x,
            plot_area.y,
            &max_label,
            usize::from(y_axis_width.saturating_sub(1)),
            styles::text_muted(),
        );
        buf.set_stringn(
            canvas_area.x,
            plot_area.bottom().saturating_sub(1),
            "0",
            usize::from(y_axis_width),
            styles::text_muted(),
        );

        self.render_x_labels(canvas_area, plot_area, buf);

        let mut canvas = BrailleCanvas::new(plot_area.width as usize, plot_area.height as usize);
        let dot_w = canvas.dot_width();
        let dot_h = canvas.dot_height();
        let n = self.points.len();

        let to_dot_x = |idx: usize| -> usize {
            if n <= 1 {
                dot_w / 2
            } else {
                (idx * (dot_w - 1)) / (n - 1)
            }
        };
        // Larger values sit higher (toward y = 0)
        let to_dot_y = |downloads: i64| -> usize {
            let ratio = downloads.max(0) as f64 / max as f64;
            let dot = (ratio * (dot_h as f64 - 1.0)).round() as usize;
            dot_h.saturating_sub(1).saturating_sub(dot)
        };

        let dots: Vec<(usize, usize)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (to_dot_x(i), to_dot_y(p.downloads)))
            .collect();

        match dots.as_slice() {
            [single] => canvas.set(single.0, single.1),
            _ => {
                for pair in dots.windows(2) {
                    canvas.line(pair[0], pair[1]);
                }
            }
        }

        canvas.render_to_buffer(
            buf,
            plot_area,
            ratatui::style::Style::default().fg(palette::CHART_LINE),
        );
    }
}

impl DownloadsChart<'_> {
    /// First date on the left, last date on the right of the bottom row
    fn render_x_labels(&self, canvas_area: Rect, plot_area: Rect, buf: &mut Buffer) {
        let row = Rect {
            x: plot_area.x,
            y: canvas_area.bottom() - 1,
            width: plot_area.width,
            height: 1,
        };

        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return;
        };

        Line::styled(first.date.as_str(), styles::text_muted()).render(row, buf);

        let first_width = first.date.chars().count() as u16;
        let last_width = last.date.chars().count() as u16;
        if self.points.len() > 1 && first_width + 1 + last_width <= row.width {
            Line::styled(last.date.as_str(), styles::text_muted())
                .right_aligned()
                .render(row, buf);
        }
    }
}
