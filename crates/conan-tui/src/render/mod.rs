//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Tabs};
use ratatui::Frame;

use conan_app::{AppState, UiMode};
use conan_core::{ContentTab, PageBody, PageView};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::KeyHint;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let hints = key_hints(state);

    let Some(page) = state.page_view() else {
        render_loading(frame, state, area, icons, &hints);
        return;
    };

    let summary = widgets::PackageSummary::new(&page, icons);
    let areas = layout::create(
        area,
        |width| {
            if summary.is_empty() {
                0
            } else {
                summary.required_height(width)
            }
        },
        page.chart.is_some(),
        page.tabs().is_some(),
    );

    let header = widgets::PageHeader::new(&state.package_id, icons)
        .with_version(page.title_prefix(), &page.version)
        .picker_open(state.ui_mode == UiMode::VersionPicker)
        .hints(&hints);
    frame.render_widget(header, areas.header);

    if !summary.is_empty() {
        frame.render_widget(summary, areas.summary);
    }

    if let (Some(points), Some(chart_area)) = (&page.chart, areas.chart) {
        frame.render_widget(widgets::DownloadsChart::new(points), chart_area);
    }

    if let Some(tabs_area) = areas.tabs {
        render_tab_bar(frame, state.content_tab, tabs_area);
    }

    render_body(frame, state, &page, areas.body, icons);

    if state.ui_mode == UiMode::VersionPicker {
        if let Some(catalog) = &state.catalog {
            let picker = widgets::VersionPicker::new(
                catalog.versions(),
                state.selected,
                state.version_picker.highlighted,
                icons,
            );
            frame.render_widget(picker, area);
        }
    }
}

fn render_loading(
    frame: &mut Frame,
    state: &AppState,
    area: Rect,
    icons: IconSet,
    hints: &[KeyHint],
) {
    let (header_area, body_area) = layout::create_loading(area);
    frame.render_widget(
        widgets::PageHeader::new(&state.package_id, icons).hints(hints),
        header_area,
    );
    frame.render_widget(
        widgets::LoadingView::new(&state.package_id, icons).error(state.load_error.as_deref()),
        body_area,
    );
}

/// "Use it" | "Badges" selector
fn render_tab_bar(frame: &mut Frame, active: ContentTab, area: Rect) {
    let tabs = Tabs::new(ContentTab::ALL.iter().map(|tab| tab.title()))
        .select(active.index())
        .style(styles::text_secondary())
        .highlight_style(styles::focused_selected())
        .divider(Span::styled("│", styles::text_muted()));
    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame, state: &AppState, page: &PageView, area: Rect, icons: IconSet) {
    match &page.body {
        PageBody::Fallback(description) => {
            frame.render_widget(widgets::DefaultDescriptionView::new(description), area);
        }
        PageBody::Tabs(tabs) => match state.content_tab {
            ContentTab::UseIt => frame.render_widget(
                widgets::UseItView::new(&tabs.use_it, icons).scroll(state.use_it_scroll),
                area,
            ),
            ContentTab::Badges => frame.render_widget(
                widgets::BadgesPanel::new(
                    &tabs.badges,
                    state.badge_format,
                    &state.copy_feedback,
                    icons,
                ),
                area,
            ),
        },
    }
}

/// Key hints for the header, by mode
fn key_hints(state: &AppState) -> Vec<KeyHint> {
    match state.ui_mode {
        UiMode::Loading => {
            let mut hints = Vec::new();
            if state.load_error.is_some() {
                hints.push(("r", "retry"));
            }
            hints.push(("q", "quit"));
            hints
        }
        UiMode::VersionPicker => vec![("↑↓", "move"), ("Enter", "select"), ("Esc", "close")],
        UiMode::Normal => {
            let mut hints = vec![("v", "version")];
            if state.has_tabs() {
                hints.push(("Tab", "switch"));
                match state.content_tab {
                    ContentTab::UseIt => hints.push(("↑↓", "scroll")),
                    ContentTab::Badges => {
                        hints.push(("←→", "format"));
                        hints.push(("c", "copy"));
                    }
                }
            }
            hints.push(("q", "quit"));
            hints
        }
    }
}
