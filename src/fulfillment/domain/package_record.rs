use super::{LicenseDeclaration, PackageIdentity};
use std::path::{Path, PathBuf};

/// PackageRecord value object: the metadata of one installed package version
///
/// Records are produced by the inventory provider and never mutated in
/// place; every pipeline stage returns a new record built with the `with_*`
/// methods.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    identity: PackageIdentity,
    licenses: LicenseDeclaration,
    repository: Option<String>,
    publisher: Option<String>,
    license_file: Option<PathBuf>,
    license_text: Option<String>,
    force_accept: bool,
    agreed_license: Option<String>,
}

impl PackageRecord {
    pub fn new(identity: PackageIdentity, licenses: LicenseDeclaration) -> Self {
        Self {
            identity,
            licenses,
            repository: None,
            publisher: None,
            license_file: None,
            license_text: None,
            force_accept: false,
            agreed_license: None,
        }
    }

    pub fn with_licenses(mut self, licenses: LicenseDeclaration) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn with_repository(mut self, repository: Option<String>) -> Self {
        self.repository = repository;
        self
    }

    pub fn with_publisher(mut self, publisher: Option<String>) -> Self {
        self.publisher = publisher;
        self
    }

    pub fn with_license_file(mut self, license_file: Option<PathBuf>) -> Self {
        self.license_file = license_file;
        self
    }

    /// Sets the license text; an empty string is stored as no text
    pub fn with_license_text(mut self, license_text: Option<String>) -> Self {
        self.license_text = license_text.filter(|text| !text.is_empty());
        self
    }

    pub fn with_force_accept(mut self, force_accept: bool) -> Self {
        self.force_accept = force_accept;
        self
    }

    pub fn with_agreed_license(mut self, agreed_license: Option<String>) -> Self {
        self.agreed_license = agreed_license;
        self
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn version(&self) -> &str {
        self.identity.version()
    }

    pub fn licenses(&self) -> &LicenseDeclaration {
        &self.licenses
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn license_file(&self) -> Option<&Path> {
        self.license_file.as_deref()
    }

    pub fn license_text(&self) -> Option<&str> {
        self.license_text.as_deref()
    }

    pub fn force_accept(&self) -> bool {
        self.force_accept
    }

    /// Agreed license carried into resolution (only ever set by an override)
    pub fn agreed_license(&self) -> Option<&str> {
        self.agreed_license.as_deref()
    }
}
