use super::*;
use crate::test_utils::TestTerminal;

fn point(date: &str, downloads: i64) -> DownloadPoint {
    DownloadPoint {
        date: date.to_string(),
        downloads,
    }
}

fn braille_cells(term: &TestTerminal) -> Vec<(u16, u16)> {
    let buf = term.buffer();
    let mut cells = Vec::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            let ch = buf[(x, y)].symbol().chars().next().unwrap_or(' ');
            if ('\u{2801}'..='\u{28ff}').contains(&ch) {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_canvas_rect_is_fixed_with_margin() {
    let rect = canvas_rect(Rect::new(5, 3, 80, 20));
    assert_eq!(rect, Rect::new(6, 4, 40, 10));
}

#[test]
fn test_canvas_rect_clips_to_small_area() {
    let rect = canvas_rect(Rect::new(0, 0, 20, 6));
    assert_eq!(rect, Rect::new(1, 1, 18, 4));
}

#[test]
fn test_chart_footprint_matches_canvas() {
    assert_eq!(DownloadsChart::width(), 42);
    assert_eq!(DownloadsChart::height(), 12);
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(950), "950");
    assert_eq!(format_count(1_250), "1.2k");
    assert_eq!(format_count(3_400_000), "3.4M");
    assert_eq!(format_count(-5), "0");
}

#[test]
fn test_chart_draws_inside_canvas_only() {
    let points = vec![
        point("2024-01-01", 10),
        point("2024-02-01", 40),
        point("2024-03-01", 25),
    ];
    let mut term = TestTerminal::with_size(60, 14);
    term.render_widget(DownloadsChart::new(&points), term.area());

    let cells = braille_cells(&term);
    assert!(!cells.is_empty());
    for (x, y) in cells {
        assert!((1..41).contains(&x), "x={x}");
        assert!((1..11).contains(&y), "y={y}");
    }
}

#[test]
fn test_chart_shows_axis_labels() {
    let points = vec![point("2024-01-01", 1_500), point("2024-06-01", 3_000)];
    let mut term = TestTerminal::with_size(60, 14);
    term.render_widget(DownloadsChart::new(&points), term.area());

    assert!(term.line_contains(1, "3.0k"));
    assert!(term.line_contains(10, "2024-01-01"));
    assert!(term.line_contains(10, "2024-06-01"));
}

#[test]
fn test_empty_history_draws_nothing() {
    let mut term = TestTerminal::with_size(60, 14);
    term.render_widget(DownloadsChart::new(&[]), term.area());
    assert!(braille_cells(&term).is_empty());
    assert!(!term.buffer_contains("0"));
}

#[test]
fn test_single_point_is_plotted() {
    let points = vec![point("2024-01-01", 7)];
    let mut term = TestTerminal::with_size(60, 14);
    term.render_widget(DownloadsChart::new(&points), term.area());
    assert_eq!(braille_cells(&term).len(), 1);
}
