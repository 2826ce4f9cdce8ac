use crate::fulfillment::domain::PackageRecord;
use crate::shared::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Installed packages in the provider's enumeration order
///
/// Order is part of the contract: it decides the order in which versions
/// are merged into fulfillment records.
pub type Inventory = Vec<PackageRecord>;

/// Parameters handed to the inventory provider
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryQuery {
    /// Roots to scan for dependency metadata
    pub start_paths: Vec<PathBuf>,
    /// Restrict the scan to production dependencies
    pub production: bool,
    /// Value reported as the license of packages whose license cannot be determined
    pub unknown: String,
    /// Field-shape hint: extra fields to report and their default values
    pub custom_format: IndexMap<String, serde_json::Value>,
}

/// InventoryProvider port for discovering installed packages
///
/// This port abstracts the dependency scanner that reports, for every
/// installed package version, its declared license and bundled license
/// metadata.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// Scans the configured roots and returns every installed package
    ///
    /// # Errors
    /// Any error aborts the whole fulfillment run and is reported unchanged.
    async fn scan(&self, query: &InventoryQuery) -> Result<Inventory>;
}
