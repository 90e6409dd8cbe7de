//! ConanCenter registry access
//!
//! [`RegistryApi`] fetches the two per-package documents. The TUI and the
//! headless runner both go through [`load_catalog`], which fetches the info
//! document, then the downloads document, and merges them.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiSettings;
use conan_core::prelude::*;
use conan_core::{DownloadsByVersion, PackageCatalog, PackageInfoByVersion};

/// The two endpoint URLs of one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrls {
    pub info: Url,
    pub downloads: Url,
}

impl PackageUrls {
    /// Build `<base>/package/<id>` and `<base>/package/<id>/downloads`.
    ///
    /// The package id is percent-encoded as a single path segment.
    pub fn new(base_url: &str, package_id: &str) -> Result<Self> {
        validate_package_id(package_id)?;

        let base = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL {:?}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::config(format!(
                "API base URL {:?} cannot hold a path",
                base_url
            )));
        }

        let mut info = base;
        info.path_segments_mut()
            .map_err(|_| Error::config(format!("API base URL {:?} cannot hold a path", base_url)))?
            .pop_if_empty()
            .push("package")
            .push(package_id);

        let mut downloads = info.clone();
        downloads
            .path_segments_mut()
            .map_err(|_| Error::config(format!("API base URL {:?} cannot hold a path", base_url)))?
            .push("downloads");

        Ok(Self { info, downloads })
    }
}

/// Reject identifiers that cannot name a package
pub fn validate_package_id(package_id: &str) -> Result<()> {
    if package_id.trim().is_empty() || package_id.contains('/') {
        return Err(Error::InvalidPackageId(package_id.to_string()));
    }
    Ok(())
}

/// Registry fetch operations
///
/// Implemented over HTTP by [`HttpRegistryClient`]; tests provide in-memory
/// implementations.
#[trait_variant::make(RegistryApi: Send)]
pub trait LocalRegistryApi {
    /// Fetch the package info document (version -> record)
    async fn fetch_package_info(&self, package_id: &str) -> Result<PackageInfoByVersion>;

    /// Fetch the downloads document (version -> history)
    async fn fetch_downloads(&self, package_id: &str) -> Result<DownloadsByVersion>;
}

/// Fetch both documents sequentially and merge them.
///
/// Single attempt, no retry.
pub async fn load_catalog<R: RegistryApi + Sync>(
    registry: &R,
    package_id: &str,
) -> Result<PackageCatalog> {
    let info = registry.fetch_package_info(package_id).await?;
    debug!("Fetched info for {} ({} versions)", package_id, info.len());

    let downloads = registry.fetch_downloads(package_id).await?;
    debug!(
        "Fetched downloads for {} ({} versions)",
        package_id,
        downloads.len()
    );

    PackageCatalog::merge(package_id, info, downloads)
}

/// Registry client over HTTP using reqwest
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistryClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| Error::registry(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::registry(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::registry_status(status.as_u16(), url.as_str()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::registry(format!("Reading {} failed: {}", url, e)))?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl RegistryApi for HttpRegistryClient {
    async fn fetch_package_info(&self, package_id: &str) -> Result<PackageInfoByVersion> {
        let urls = PackageUrls::new(&self.base_url, package_id)?;
        self.get_json(urls.info).await
    }

    async fn fetch_downloads(&self, package_id: &str) -> Result<DownloadsByVersion> {
        let urls = PackageUrls::new(&self.base_url, package_id)?;
        self.get_json(urls.downloads).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use conan_core::{parse_downloads, parse_package_info};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory registry returning fixed documents
    #[derive(Debug, Default)]
    pub struct StaticRegistry {
        pub info: Option<String>,
        pub downloads: Option<String>,
        pub calls: AtomicUsize,
    }

    impl StaticRegistry {
        pub fn new(info: &str, downloads: &str) -> Self {
            Self {
                info: Some(info.to_string()),
                downloads: Some(downloads.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self::default()
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RegistryApi for StaticRegistry {
        async fn fetch_package_info(&self, package_id: &str) -> Result<PackageInfoByVersion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.info {
                Some(json) => parse_package_info(json),
                None => Err(Error::registry_status(404, format!("/package/{package_id}"))),
            }
        }

        async fn fetch_downloads(&self, package_id: &str) -> Result<DownloadsByVersion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.downloads {
                Some(json) => parse_downloads(json),
                None => Err(Error::registry_status(
                    404,
                    format!("/package/{package_id}/downloads"),
                )),
            }
        }
    }
}
