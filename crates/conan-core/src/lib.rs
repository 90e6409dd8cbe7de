//! # conan-core - Core Domain Types
//!
//! Foundation crate for the ConanCenter package browser. Provides the registry
//! wire types, the per-version merge step, version selection, badge snippet
//! generation, and the derived page model.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, indexmap, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Wire Types (`package`)
//! - [`PackageInfoByVersion`], [`DownloadsByVersion`] - The two registry documents
//! - [`PackageInfo`] - Optional metadata of one version
//!
//! ### Catalog (`catalog`)
//! - [`PackageCatalog`] - Ordered per-version records, built by a single merge step
//! - [`resolve_initial_version()`] - Validated initial selection with fallback
//!
//! ### Badges (`badges`)
//! - [`BadgeFormat`], [`badge_snippets()`] - Shield snippets in four markup formats
//!
//! ### Page (`page`)
//! - [`PageView`] - Everything the package page shows for one version
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use conan_core::prelude::*;
//! ```

pub mod badges;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod package;
pub mod page;
pub mod use_it;

/// Prelude for common imports used throughout all browser crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use badges::{badge_snippet, badge_snippets, badge_url, BadgeFormat, BadgeSnippet};
pub use catalog::{resolve_initial_version, PackageCatalog, VersionRecord, VersionResolution};
pub use error::{Error, Result, ResultExt};
pub use package::{
    parse_downloads, parse_package_info, DownloadPoint, DownloadsByVersion, DownloadsRecord,
    PackageInfo, PackageInfoByVersion, PackageRecord,
};
pub use page::{
    recipe_source_url, BadgesView, ContentTab, DefaultDescription, PageBody, PageTabs, PageView,
    CHART_MARGIN, CHART_SIZE,
};
pub use use_it::{render_use_it, UseItText};
