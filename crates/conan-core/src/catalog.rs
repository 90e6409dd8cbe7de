//! Per-version records and version selection
//!
//! [`PackageCatalog::merge`] joins the info and downloads documents into one
//! ordered list of [`VersionRecord`]s right after the fetch, so every version
//! always carries both halves.

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::package::{DownloadPoint, DownloadsByVersion, PackageInfo, PackageInfoByVersion};

/// Info and download history of one package version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionRecord {
    pub version: String,
    pub name: String,
    pub info: PackageInfo,
    pub downloads: Vec<DownloadPoint>,
}

impl VersionRecord {
    pub fn has_download_history(&self) -> bool {
        !self.downloads.is_empty()
    }
}

/// All versions of a package, in the order the registry listed them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageCatalog {
    pub package_id: String,
    versions: Vec<VersionRecord>,
}

impl PackageCatalog {
    /// Combine the two registry documents.
    ///
    /// Version order follows the info document. A version without a downloads
    /// entry gets an empty history. Download entries for versions the info
    /// document does not list are dropped.
    pub fn merge(
        package_id: impl Into<String>,
        info: PackageInfoByVersion,
        mut downloads: DownloadsByVersion,
    ) -> Result<Self> {
        let package_id = package_id.into();
        if info.is_empty() {
            return Err(Error::empty_package(package_id));
        }

        let versions = info
            .into_iter()
            .map(|(version, record)| {
                let history = match downloads.swap_remove(&version) {
                    Some(entry) => entry.downloads.unwrap_or_default(),
                    None => {
                        warn!(
                            "No downloads record for {}/{}, using empty history",
                            package_id, version
                        );
                        Vec::new()
                    }
                };
                VersionRecord {
                    version,
                    name: record.name,
                    info: record.info,
                    downloads: history,
                }
            })
            .collect();

        if !downloads.is_empty() {
            warn!(
                "Ignoring {} downloads record(s) without package info for {}",
                downloads.len(),
                package_id
            );
        }

        Ok(Self {
            package_id,
            versions,
        })
    }

    pub fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always false for a merged catalog; kept for slice-like API symmetry
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VersionRecord> {
        self.versions.get(index)
    }

    pub fn index_of(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|r| r.version == version)
    }

    pub fn version_keys(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|r| r.version.as_str())
    }
}

/// Outcome of resolving the initial version selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolution {
    /// Index into the catalog
    pub index: usize,
    /// Requested version that was not found, if the fallback was taken
    pub rejected: Option<String>,
}

/// Pick the initial version: the requested one when it exists, else the first.
pub fn resolve_initial_version(
    catalog: &PackageCatalog,
    requested: Option<&str>,
) -> VersionResolution {
    match requested {
        Some(version) => match catalog.index_of(version) {
            Some(index) => VersionResolution {
                index,
                rejected: None,
            },
            None => {
                warn!(
                    "Requested version {:?} not found for {}, falling back to {:?}",
                    version,
                    catalog.package_id,
                    catalog.get(0).map(|r| r.version.as_str())
                );
                VersionResolution {
                    index: 0,
                    rejected: Some(version.to_string()),
                }
            }
        },
        None => VersionResolution {
            index: 0,
            rejected: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{parse_downloads, parse_package_info};

    fn catalog(info: &str, downloads: &str) -> PackageCatalog {
        PackageCatalog::merge(
            "zlib",
            parse_package_info(info).unwrap(),
            parse_downloads(downloads).unwrap(),
        )
        .unwrap()
    }

    const TWO_VERSIONS: &str = r#"{
        "1.0": {"name": "zlib", "info": {"description": "old"}},
        "2.0": {"name": "zlib", "info": {"description": "new"}}
    }"#;

    #[test]
    fn test_merge_keeps_info_order_and_joins_history() {
        let c = catalog(
            TWO_VERSIONS,
            r#"{
                "2.0": {"downloads": [{"date": "2024-02-01", "downloads": 3}]},
                "1.0": {"downloads": []}
            }"#,
        );

        let keys: Vec<&str> = c.version_keys().collect();
        assert_eq!(keys, vec!["1.0", "2.0"]);
        assert!(!c.get(0).unwrap().has_download_history());
        assert_eq!(c.get(1).unwrap().downloads[0].downloads, 3);
    }

    #[test]
    fn test_merge_missing_downloads_record_gives_empty_history() {
        let c = catalog(TWO_VERSIONS, r#"{"1.0": {"downloads": []}}"#);

        assert_eq!(c.len(), 2);
        assert!(c.get(1).unwrap().downloads.is_empty());
    }

    #[test]
    fn test_merge_ignores_orphan_downloads() {
        let c = catalog(
            TWO_VERSIONS,
            r#"{"3.0": {"downloads": [{"date": "2024-01-01", "downloads": 1}]}}"#,
        );
        assert_eq!(c.len(), 2);
        assert_eq!(c.index_of("3.0"), None);
    }

    #[test]
    fn test_merge_empty_info_is_error() {
        let err = PackageCatalog::merge(
            "ghost",
            PackageInfoByVersion::new(),
            DownloadsByVersion::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyPackage { .. }));
    }

    #[test]
    fn test_default_selection_is_first_key() {
        let c = catalog(TWO_VERSIONS, "{}");
        let resolution = resolve_initial_version(&c, None);

        assert_eq!(c.get(resolution.index).unwrap().version, "1.0");
        assert_eq!(resolution.rejected, None);
    }

    #[test]
    fn test_explicit_selection_wins_regardless_of_order() {
        let c = catalog(TWO_VERSIONS, "{}");
        let resolution = resolve_initial_version(&c, Some("2.0"));

        assert_eq!(c.get(resolution.index).unwrap().version, "2.0");
        assert_eq!(resolution.rejected, None);
    }

    #[test]
    fn test_unknown_selection_falls_back_to_first() {
        let c = catalog(TWO_VERSIONS, "{}");
        let resolution = resolve_initial_version(&c, Some("9.9"));

        assert_eq!(resolution.index, 0);
        assert_eq!(resolution.rejected.as_deref(), Some("9.9"));
    }
}
