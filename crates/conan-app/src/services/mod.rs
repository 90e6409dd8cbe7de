//! Service layer for registry access

pub mod registry;

pub use registry::{
    load_catalog, validate_package_id, HttpRegistryClient, LocalRegistryApi, PackageUrls,
    RegistryApi,
};
