//! Custom widget components

mod badges_panel;
mod copy_button;
mod default_description;
pub mod downloads_chart;
mod header;
mod loading;
mod package_summary;
mod use_it_view;
mod version_picker;

pub use badges_panel::{format_tab_line, BadgesPanel};
pub use copy_button::{CopyButton, COPIED_LABEL};
pub use default_description::DefaultDescriptionView;
pub use downloads_chart::DownloadsChart;
pub use header::{KeyHint, PageHeader};
pub use loading::{LoadingView, LOADING_TEXT};
pub use package_summary::{format_thousands, PackageSummary};
pub use use_it_view::UseItView;
pub use version_picker::VersionPicker;
