//! Wire types for the ConanCenter private API
//!
//! Two documents describe a package:
//! - the info document, a JSON object keyed by version string
//! - the downloads document, a JSON object keyed by version string
//!
//! The info document is deserialized into an [`IndexMap`] so the version order
//! of the document survives; the first key is the default selection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package info document: version string -> package record
pub type PackageInfoByVersion = IndexMap<String, PackageRecord>;

/// Downloads document: version string -> downloads record
pub type DownloadsByVersion = IndexMap<String, DownloadsRecord>;

/// One version entry of the info document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PackageRecord {
    /// Recipe name (e.g. "zlib")
    pub name: String,

    #[serde(default)]
    pub info: PackageInfo,
}

/// Optional metadata of one package version
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub licenses: Option<Vec<String>>,

    /// Total download counter reported by the info endpoint
    #[serde(default)]
    pub downloads: Option<i64>,

    #[serde(default)]
    pub labels: Option<Vec<String>>,

    /// Structured "how to use" payload, passed through untouched
    #[serde(default)]
    pub use_it: Option<serde_json::Value>,
}

impl PackageInfo {
    /// Description, treating an empty string as absent
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn licenses(&self) -> &[String] {
        self.licenses.as_deref().unwrap_or_default()
    }

    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }

    /// Download counter, zero when absent
    pub fn download_count(&self) -> i64 {
        self.downloads.unwrap_or(0)
    }
}

/// One version entry of the downloads document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DownloadsRecord {
    #[serde(default)]
    pub downloads: Option<Vec<DownloadPoint>>,
}

/// A single point of the download history
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DownloadPoint {
    pub date: String,
    pub downloads: i64,
}

/// Parse the info document, keeping version order
pub fn parse_package_info(json: &str) -> crate::Result<PackageInfoByVersion> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the downloads document
pub fn parse_downloads(json: &str) -> crate::Result<DownloadsByVersion> {
    Ok(serde_json::from_str(json)?)
}
