//! Screen layout definitions for the package page
//!
//! The header sits on top. Below it the summary card shares a row with the
//! downloads chart when the terminal is wide enough, otherwise the chart is
//! stacked under the summary. The tab bar and the body take the rest.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::DownloadsChart;

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Narrowest summary card that still shares its row with the chart
pub const MIN_SUMMARY_WIDTH: u16 = 30;

/// Screen areas for the package page
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub summary: Rect,
    /// `None` when the selected version has no download history
    pub chart: Option<Rect>,
    /// Tab bar row, `None` when the body is the fallback description
    pub tabs: Option<Rect>,
    pub body: Rect,
}

/// Screen areas for the "Loading..." screen
pub fn create_loading(area: Rect) -> (Rect, Rect) {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    (header, body)
}

/// Create the package page layout
///
/// `summary_height` returns the rows the summary card needs at a given width.
pub fn create(
    area: Rect,
    summary_height: impl Fn(u16) -> u16,
    has_chart: bool,
    has_tabs: bool,
) -> ScreenAreas {
    let chart_width = DownloadsChart::width();
    let chart_height = DownloadsChart::height();
    let side_by_side = has_chart && area.width >= chart_width + MIN_SUMMARY_WIDTH;

    let (top_height, summary_width) = if side_by_side {
        let width = area.width - chart_width;
        (summary_height(width).max(chart_height), width)
    } else if has_chart {
        (summary_height(area.width).saturating_add(chart_height), area.width)
    } else {
        (summary_height(area.width), area.width)
    };

    let [header, top, tabs, body] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(top_height),
        Constraint::Length(u16::from(has_tabs)),
        Constraint::Min(3),
    ])
    .areas(area);

    let (summary, chart) = if side_by_side {
        let [summary, chart] =
            Layout::horizontal([Constraint::Length(summary_width), Constraint::Min(0)])
                .areas(top);
        (summary, Some(chart))
    } else if has_chart {
        let [summary, chart] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(chart_height)]).areas(top);
        (summary, Some(chart))
    } else {
        (top, None)
    };

    ScreenAreas {
        header,
        summary,
        chart,
        tabs: has_tabs.then_some(tabs),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_layout() {
        let (header, body) = create_loading(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 21);
    }

    #[test]
    fn test_chart_beside_summary_when_wide() {
        let layout = create(Rect::new(0, 0, 100, 40), |_| 5, true, true);

        let chart = layout.chart.unwrap();
        assert_eq!(layout.summary.width, 58);
        assert_eq!(chart.x, 58);
        assert_eq!(chart.width, 42);
        // Row grows to the chart's height
        assert_eq!(layout.summary.height, 12);
        assert_eq!(layout.tabs.unwrap().y, 3 + 12);
        assert_eq!(layout.body.y, 3 + 12 + 1);
    }

    #[test]
    fn test_chart_stacked_when_narrow() {
        let layout = create(Rect::new(0, 0, 60, 40), |_| 4, true, false);

        let chart = layout.chart.unwrap();
        assert_eq!(layout.summary.height, 4);
        assert_eq!(chart.y, 3 + 4);
        assert_eq!(chart.height, 12);
        assert!(layout.tabs.is_none());
        assert_eq!(layout.body.y, 3 + 4 + 12);
    }

    #[test]
    fn test_no_chart() {
        let layout = create(Rect::new(0, 0, 100, 30), |_| 6, false, true);

        assert!(layout.chart.is_none());
        assert_eq!(layout.summary.width, 100);
        assert_eq!(layout.summary.height, 6);
        assert_eq!(layout.body.height, 30 - 3 - 6 - 1);
    }

    #[test]
    fn test_summary_height_uses_its_own_width() {
        let layout = create(
            Rect::new(0, 0, 100, 40),
            |width| if width < 100 { 14 } else { 2 },
            true,
            false,
        );
        assert_eq!(layout.summary.height, 14);
    }
}
