//! Display model of the package page
//!
//! [`PageView::derive`] turns the selected [`VersionRecord`] into everything
//! the page shows. Each optional section is gated on its own field, so switching
//! versions never leaves a stale section behind.

use serde::Serialize;

use crate::badges::{badge_snippets, badge_url, BadgeSnippet};
use crate::catalog::VersionRecord;
use crate::package::DownloadPoint;
use crate::use_it::{render_use_it, UseItText};

/// Base of the recipe source link; the recipe name is appended
pub const RECIPE_SOURCE_BASE_URL: &str =
    "https://github.com/conan-io/conan-center-index/tree/master/recipes/";

/// Fixed chart canvas size in terminal cells (width, height)
pub const CHART_SIZE: (u16, u16) = (40, 10);

/// Fixed chart margin in cells on every side
pub const CHART_MARGIN: u16 = 1;

/// Recipe source URL for a recipe name
pub fn recipe_source_url(name: &str) -> String {
    format!("{RECIPE_SOURCE_BASE_URL}{name}")
}

/// Everything the package page renders for one version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// Licenses joined with ", "
    pub license_line: Option<String>,
    /// Info-level download counter, shown when any download data exists
    pub downloads_line: Option<i64>,
    pub recipe_url: Option<String>,
    /// Labels formatted as `#label`
    pub labels: Vec<String>,
    /// Download history for the chart, `None` when there is none
    pub chart: Option<Vec<DownloadPoint>>,
    pub body: PageBody,
}

/// Main content below the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    /// Shown when the version has no description
    Fallback(DefaultDescription),
    /// "Use it" and "Badges" tabs
    Tabs(PageTabs),
}

/// Content of the two body tabs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageTabs {
    pub use_it: UseItText,
    pub badges: BadgesView,
}

/// Content of the "Badges" tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgesView {
    pub image_url: String,
    pub snippets: [BadgeSnippet; 4],
}

impl BadgesView {
    pub fn new(package_id: &str) -> Self {
        Self {
            image_url: badge_url(package_id),
            snippets: badge_snippets(package_id),
        }
    }
}

/// Generic description block for packages without a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultDescription {
    pub name: String,
}

impl DefaultDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "{} is available in ConanCenter, the central repository of open source C and C++ packages for Conan.",
                self.name
            ),
            format!(
                "Add it to the requirements of your conanfile as \"{}/<version>\" and run \"conan install\".",
                self.name
            ),
        ]
    }
}

/// Which body tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTab {
    #[default]
    UseIt,
    Badges,
}

impl ContentTab {
    pub const ALL: [ContentTab; 2] = [ContentTab::UseIt, ContentTab::Badges];

    pub fn title(&self) -> &'static str {
        match self {
            ContentTab::UseIt => "Use it",
            ContentTab::Badges => "Badges",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ContentTab::UseIt => 0,
            ContentTab::Badges => 1,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ContentTab::UseIt => ContentTab::Badges,
            ContentTab::Badges => ContentTab::UseIt,
        }
    }
}

impl PageView {
    /// Derive the page for one version record.
    ///
    /// `package_id` is the routing identifier; the badges use it, while the
    /// recipe link uses the record's own name.
    pub fn derive(package_id: &str, record: &VersionRecord) -> Self {
        let info = &record.info;
        let description = info.description().map(str::to_string);

        let licenses = info.licenses();
        let license_line = (!licenses.is_empty()).then(|| licenses.join(", "));

        let downloads_line = (record.has_download_history() || info.download_count() > 0)
            .then(|| info.download_count());

        let recipe_url = description
            .as_ref()
            .map(|_| recipe_source_url(&record.name));

        let labels = info.labels().iter().map(|l| format!("#{l}")).collect();

        let chart = record
            .has_download_history()
            .then(|| record.downloads.clone());

        let body = if description.is_some() {
            PageBody::Tabs(PageTabs {
                use_it: render_use_it(info.use_it.as_ref()),
                badges: BadgesView::new(package_id),
            })
        } else {
            PageBody::Fallback(DefaultDescription::new(&record.name))
        };

        Self {
            name: record.name.clone(),
            version: record.version.clone(),
            description,
            license_line,
            downloads_line,
            recipe_url,
            labels,
            chart,
            body,
        }
    }

    /// `name/` prefix shown in front of the version selector
    pub fn title_prefix(&self) -> String {
        format!("{}/", self.name)
    }

    pub fn tabs(&self) -> Option<&PageTabs> {
        match &self.body {
            PageBody::Tabs(tabs) => Some(tabs),
            PageBody::Fallback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageInfo;
    use serde_json::json;

    fn record(version: &str, info: PackageInfo, downloads: Vec<DownloadPoint>) -> VersionRecord {
        VersionRecord {
            version: version.to_string(),
            name: "zlib".to_string(),
            info,
            downloads,
        }
    }

    fn point(date: &str, downloads: i64) -> DownloadPoint {
        DownloadPoint {
            date: date.to_string(),
            downloads,
        }
    }

    fn full_info() -> PackageInfo {
        PackageInfo {
            description: Some("A Massively Spiffy Yet Delicately Unobtrusive Compression Library".into()),
            licenses: Some(vec!["Zlib".into(), "MIT".into()]),
            downloads: Some(42),
            labels: Some(vec!["compression".into()]),
            use_it: Some(json!({"cmake": "ZLIB::ZLIB"})),
        }
    }

    #[test]
    fn test_full_record_renders_every_section() {
        let view = PageView::derive("zlib", &record("1.3", full_info(), vec![point("2024-01-01", 5)]));

        assert_eq!(view.title_prefix(), "zlib/");
        assert!(view.description.is_some());
        assert_eq!(view.license_line.as_deref(), Some("Zlib, MIT"));
        assert_eq!(view.downloads_line, Some(42));
        assert_eq!(
            view.recipe_url.as_deref(),
            Some("https://github.com/conan-io/conan-center-index/tree/master/recipes/zlib")
        );
        assert_eq!(view.labels, vec!["#compression".to_string()]);
        assert_eq!(view.chart.as_ref().map(Vec::len), Some(1));
        let tabs = view.tabs().expect("tabs body");
        assert!(tabs.use_it.is_preformatted());
        assert_eq!(tabs.badges.image_url, "https://img.shields.io/conan/v/zlib");
    }

    #[test]
    fn test_missing_description_hides_dependent_sections() {
        let info = PackageInfo {
            description: None,
            ..full_info()
        };
        let view = PageView::derive("zlib", &record("1.3", info, vec![]));

        assert!(view.description.is_none());
        assert!(view.recipe_url.is_none());
        assert!(view.tabs().is_none());
        assert_eq!(
            view.body,
            PageBody::Fallback(DefaultDescription::new("zlib"))
        );
    }

    #[test]
    fn test_downloads_line_uses_info_counter_without_history() {
        let view = PageView::derive("zlib", &record("1.3", full_info(), vec![]));

        assert_eq!(view.downloads_line, Some(42));
        assert!(view.chart.is_none());
    }

    #[test]
    fn test_downloads_line_shows_info_counter_even_when_history_triggers_it() {
        let info = PackageInfo {
            downloads: None,
            ..full_info()
        };
        let view = PageView::derive("zlib", &record("1.3", info, vec![point("2024-01-01", 9)]));

        assert_eq!(view.downloads_line, Some(0));
        assert!(view.chart.is_some());
    }

    #[test]
    fn test_no_download_data_hides_downloads_line() {
        let info = PackageInfo {
            downloads: Some(0),
            ..full_info()
        };
        let view = PageView::derive("zlib", &record("1.3", info, vec![]));
        assert_eq!(view.downloads_line, None);
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let info = PackageInfo {
            licenses: Some(vec![]),
            labels: Some(vec![]),
            ..full_info()
        };
        let view = PageView::derive("zlib", &record("1.3", info, vec![]));

        assert!(view.license_line.is_none());
        assert!(view.labels.is_empty());
    }

    #[test]
    fn test_badges_use_routing_identifier() {
        let view = PageView::derive("zlib-ng", &record("1.3", full_info(), vec![]));
        let tabs = view.tabs().unwrap();

        assert!(tabs.badges.snippets[0].text.contains("/conan/v/zlib-ng"));
        assert!(view.recipe_url.unwrap().ends_with("/recipes/zlib"));
    }

    #[test]
    fn test_switching_versions_leaves_no_stale_fields() {
        let first = record("1.0", full_info(), vec![point("2024-01-01", 1)]);
        let second = record("2.0", PackageInfo::default(), vec![]);

        let before = PageView::derive("zlib", &first);
        let after = PageView::derive("zlib", &second);

        assert!(before.license_line.is_some());
        assert_eq!(after.version, "2.0");
        assert!(after.description.is_none());
        assert!(after.license_line.is_none());
        assert!(after.downloads_line.is_none());
        assert!(after.labels.is_empty());
        assert!(after.chart.is_none());
    }

    #[test]
    fn test_missing_use_it_yields_advisory() {
        let info = PackageInfo {
            use_it: None,
            ..full_info()
        };
        let view = PageView::derive("zlib", &record("1.3", info, vec![]));
        assert!(!view.tabs().unwrap().use_it.is_preformatted());
    }

    #[test]
    fn test_content_tab_toggle() {
        assert_eq!(ContentTab::default(), ContentTab::UseIt);
        assert_eq!(ContentTab::UseIt.toggle(), ContentTab::Badges);
        assert_eq!(ContentTab::Badges.toggle(), ContentTab::UseIt);
    }
}
