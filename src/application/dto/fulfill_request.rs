use crate::fulfillment::domain::{PackageIdentity, PackageOverride};
use crate::fulfillment::policies::{
    LicensePolicy, DEFAULT_ACCEPTABLE_LICENSE_FILES, DEFAULT_UNKNOWN_LICENSE,
};
use crate::ports::outbound::InventoryQuery;
use crate::shared::error::FulfillError;
use crate::shared::Result;
use indexmap::IndexMap;
use std::path::PathBuf;

/// FulfillRequest - Internal request DTO for the fulfillment use case
///
/// Holds the whole policy configuration. Build it with
/// [`FulfillRequest::builder`], which applies defaults and validates
/// every field once.
#[derive(Debug, Clone)]
pub struct FulfillRequest {
    /// Roots to scan for dependency metadata
    pub start_paths: Vec<PathBuf>,
    /// Restrict the scan to production dependencies
    pub production: bool,
    /// Placeholder reported for undeterminable licenses
    pub unknown: String,
    /// Extra fields the inventory should report, with defaults
    pub custom_format: IndexMap<String, serde_json::Value>,
    /// Manual corrections keyed by `"<name>@<version>"`
    pub overrides: IndexMap<String, PackageOverride>,
    /// Accepted SPDX expressions, most preferred first
    pub agreed_licenses: Vec<String>,
    /// Accepted license-file base names (case-insensitive)
    pub acceptable_license_files: Vec<String>,
    /// Package names excluded from the report
    pub ignore_packages: Vec<String>,
}

impl FulfillRequest {
    pub fn builder() -> FulfillRequestBuilder {
        FulfillRequestBuilder::default()
    }

    /// The license policy described by this request
    pub fn policy(&self) -> LicensePolicy {
        LicensePolicy::new(
            self.agreed_licenses.clone(),
            self.acceptable_license_files.clone(),
            self.ignore_packages.clone(),
            self.unknown.clone(),
        )
    }

    /// The query handed to the inventory provider
    pub fn inventory_query(&self) -> InventoryQuery {
        InventoryQuery {
            start_paths: self.start_paths.clone(),
            production: self.production,
            unknown: self.unknown.clone(),
            custom_format: self.custom_format.clone(),
        }
    }
}

/// Builder for [`FulfillRequest`]
#[derive(Debug, Clone, Default)]
pub struct FulfillRequestBuilder {
    start_paths: Vec<PathBuf>,
    production: bool,
    unknown: Option<String>,
    custom_format: Option<IndexMap<String, serde_json::Value>>,
    overrides: IndexMap<String, PackageOverride>,
    agreed_licenses: Vec<String>,
    acceptable_license_files: Option<Vec<String>>,
    ignore_packages: Vec<String>,
}

impl FulfillRequestBuilder {
    pub fn start_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.start_paths.push(path.into());
        self
    }

    pub fn start_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.start_paths = paths;
        self
    }

    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = Some(unknown.into());
        self
    }

    pub fn custom_format(mut self, custom_format: IndexMap<String, serde_json::Value>) -> Self {
        self.custom_format = Some(custom_format);
        self
    }

    pub fn override_package(mut self, identity: impl Into<String>, entry: PackageOverride) -> Self {
        self.overrides.insert(identity.into(), entry);
        self
    }

    pub fn overrides(mut self, overrides: IndexMap<String, PackageOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn agreed_license(mut self, license: impl Into<String>) -> Self {
        self.agreed_licenses.push(license.into());
        self
    }

    pub fn agreed_licenses(mut self, licenses: Vec<String>) -> Self {
        self.agreed_licenses = licenses;
        self
    }

    pub fn acceptable_license_files(mut self, names: Vec<String>) -> Self {
        self.acceptable_license_files = Some(names);
        self
    }

    pub fn ignore_package(mut self, name: impl Into<String>) -> Self {
        self.ignore_packages.push(name.into());
        self
    }

    pub fn ignore_packages(mut self, names: Vec<String>) -> Self {
        self.ignore_packages = names;
        self
    }

    /// Applies defaults and validates the configuration
    ///
    /// # Errors
    /// Returns a validation error if:
    /// - An agreed license or acceptable file name is blank
    /// - The unknown-license placeholder is blank
    /// - An override key is not a `"<name>@<version>"` identity
    pub fn build(self) -> Result<FulfillRequest> {
        let unknown = self
            .unknown
            .unwrap_or_else(|| DEFAULT_UNKNOWN_LICENSE.to_string());
        if unknown.trim().is_empty() {
            return Err(validation("unknown must not be empty"));
        }

        for (i, license) in self.agreed_licenses.iter().enumerate() {
            if license.trim().is_empty() {
                return Err(validation(&format!(
                    "agreed_licenses[{}] must not be empty",
                    i
                )));
            }
        }

        let acceptable_license_files = self.acceptable_license_files.unwrap_or_else(|| {
            DEFAULT_ACCEPTABLE_LICENSE_FILES
                .iter()
                .map(|name| name.to_string())
                .collect()
        });
        for (i, name) in acceptable_license_files.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(validation(&format!(
                    "acceptable_license_files[{}] must not be empty",
                    i
                )));
            }
        }

        for identity in self.overrides.keys() {
            PackageIdentity::parse(identity)?;
        }

        let custom_format = self.custom_format.unwrap_or_else(default_custom_format);

        Ok(FulfillRequest {
            start_paths: self.start_paths,
            production: self.production,
            unknown,
            custom_format,
            overrides: self.overrides,
            agreed_licenses: self.agreed_licenses,
            acceptable_license_files,
            ignore_packages: self.ignore_packages,
        })
    }
}

/// Reports license text, read from the bundled license file when present
pub fn default_custom_format() -> IndexMap<String, serde_json::Value> {
    IndexMap::from([(
        "licenseText".to_string(),
        serde_json::Value::String(String::new()),
    )])
}

fn validation(message: &str) -> anyhow::Error {
    FulfillError::Validation {
        message: message.to_string(),
    }
    .into()
}
