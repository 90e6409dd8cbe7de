//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::copy_feedback::CopyFeedbackSet;
use conan_core::prelude::*;
use conan_core::{
    resolve_initial_version, BadgeFormat, ContentTab, PackageCatalog, PageView, VersionRecord,
};

/// Lifecycle phase of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the package documents
    #[default]
    Loading,
    /// Catalog available, page rendered
    Ready,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// "Loading..." screen
    #[default]
    Loading,

    /// Package page
    Normal,

    /// Version picker popup over the package page
    VersionPicker,
}

/// Highlight of the version picker list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionPickerState {
    pub highlighted: usize,
}

impl VersionPickerState {
    pub fn open_at(&mut self, selected: usize) {
        self.highlighted = selected;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.highlighted + 1 < len {
            self.highlighted += 1;
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Routing identifier of the package
    pub package_id: String,

    /// Version asked for on the command line
    pub requested_version: Option<String>,

    /// Merged catalog, `None` until the fetch succeeds
    pub catalog: Option<PackageCatalog>,

    /// Index of the selected version in the catalog
    pub selected: usize,

    pub version_picker: VersionPickerState,
    pub content_tab: ContentTab,
    pub badge_format: BadgeFormat,
    pub copy_feedback: CopyFeedbackSet,

    /// First visible line of the "Use it" block
    pub use_it_scroll: u16,

    /// A fetch is outstanding
    pub fetch_in_flight: bool,

    /// Reason of the last failed fetch
    pub load_error: Option<String>,

    /// Retrying the last failed fetch cannot succeed
    pub load_error_fatal: bool,

    pub settings: Settings,
}

impl AppState {
    pub fn new(
        package_id: impl Into<String>,
        requested_version: Option<String>,
        settings: Settings,
    ) -> Self {
        Self {
            phase: AppPhase::Loading,
            ui_mode: UiMode::Loading,
            package_id: package_id.into(),
            requested_version,
            catalog: None,
            selected: 0,
            version_picker: VersionPickerState::default(),
            content_tab: ContentTab::default(),
            badge_format: BadgeFormat::default(),
            copy_feedback: CopyFeedbackSet::new(),
            use_it_scroll: 0,
            fetch_in_flight: false,
            load_error: None,
            load_error_fatal: false,
            settings,
        }
    }

    /// Install a freshly fetched catalog and resolve the initial selection
    pub fn apply_catalog(&mut self, catalog: PackageCatalog) {
        let resolution = resolve_initial_version(&catalog, self.requested_version.as_deref());
        if let Some(rejected) = &resolution.rejected {
            warn!(
                "Showing {:?} instead of unknown version {:?}",
                catalog.get(resolution.index).map(|r| r.version.as_str()),
                rejected
            );
        }

        info!(
            "Loaded {} with {} versions",
            catalog.package_id,
            catalog.len()
        );

        self.selected = resolution.index;
        self.catalog = Some(catalog);
        self.phase = AppPhase::Ready;
        self.ui_mode = UiMode::Normal;
        self.load_error = None;
        self.load_error_fatal = false;
        self.use_it_scroll = 0;
    }

    /// Select a version by its key. Unknown keys leave the selection unchanged.
    pub fn select_version(&mut self, version: &str) -> bool {
        let Some(index) = self.catalog.as_ref().and_then(|c| c.index_of(version)) else {
            warn!("Ignoring selection of unknown version {:?}", version);
            return false;
        };

        if index != self.selected {
            debug!("Selected version {}", version);
        }
        self.selected = index;
        self.use_it_scroll = 0;

        // The tabs unmount without a description and remount on their defaults
        if !self.has_tabs() {
            self.content_tab = ContentTab::default();
            self.badge_format = BadgeFormat::default();
        }
        true
    }

    pub fn selected_record(&self) -> Option<&VersionRecord> {
        self.catalog.as_ref().and_then(|c| c.get(self.selected))
    }

    pub fn selected_version(&self) -> Option<&str> {
        self.selected_record().map(|r| r.version.as_str())
    }

    /// Page model of the selected version
    pub fn page_view(&self) -> Option<PageView> {
        self.selected_record()
            .map(|record| PageView::derive(&self.package_id, record))
    }

    /// The selected version has the "Use it"/"Badges" tabs
    pub fn has_tabs(&self) -> bool {
        self.selected_record()
            .and_then(|r| r.info.description())
            .is_some()
    }

    /// Number of lines of the "Use it" block of the selected version
    pub fn use_it_line_count(&self) -> usize {
        self.page_view()
            .and_then(|page| page.tabs().map(|t| t.use_it.as_str().lines().count()))
            .unwrap_or(0)
    }

    pub fn version_count(&self) -> usize {
        self.catalog.as_ref().map_or(0, PackageCatalog::len)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conan_core::{parse_downloads, parse_package_info};

    fn catalog() -> PackageCatalog {
        let info = parse_package_info(
            r#"{
                "1.3": {"name": "zlib", "info": {"description": "Compression"}},
                "1.2": {"name": "zlib", "info": {}}
            }"#,
        )
        .unwrap();
        PackageCatalog::merge("zlib", info, parse_downloads("{}").unwrap()).unwrap()
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = AppState::new("zlib", None, Settings::default());
        assert_eq!(state.phase, AppPhase::Loading);
        assert_eq!(state.ui_mode, UiMode::Loading);
        assert!(state.page_view().is_none());
    }

    #[test]
    fn test_apply_catalog_resolves_requested_version() {
        let mut state = AppState::new("zlib", Some("1.2".into()), Settings::default());
        state.apply_catalog(catalog());

        assert_eq!(state.selected_version(), Some("1.2"));
        assert_eq!(state.phase, AppPhase::Ready);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_apply_catalog_unknown_version_falls_back() {
        let mut state = AppState::new("zlib", Some("9.9".into()), Settings::default());
        state.apply_catalog(catalog());
        assert_eq!(state.selected_version(), Some("1.3"));
    }

    #[test]
    fn test_select_version() {
        let mut state = AppState::new("zlib", None, Settings::default());
        state.apply_catalog(catalog());

        assert!(state.select_version("1.2"));
        assert_eq!(state.selected_version(), Some("1.2"));
        assert!(!state.has_tabs());

        assert!(!state.select_version("0.1"));
        assert_eq!(state.selected_version(), Some("1.2"));
    }

    #[test]
    fn test_version_picker_bounds() {
        let mut picker = VersionPickerState::default();
        picker.move_up();
        assert_eq!(picker.highlighted, 0);

        picker.move_down(2);
        picker.move_down(2);
        assert_eq!(picker.highlighted, 1);
    }
}
