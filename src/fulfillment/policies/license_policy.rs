use std::collections::HashSet;
use std::path::Path;

/// Declared-license value meaning "could not be determined"
pub const DEFAULT_UNKNOWN_LICENSE: &str = "UNKNOWN";

/// License-file base names accepted when no list is configured
pub const DEFAULT_ACCEPTABLE_LICENSE_FILES: &[&str] = &["LICENSE", "LICENCE", "COPYING"];

/// LicensePolicy encodes an organization's license rules
///
/// - `agreed_licenses` is a priority order: resolution picks the first entry
///   a package's declaration satisfies, so preferred licenses go first.
/// - License-file names are compared upper-cased, without extension.
/// - Ignored packages are matched by exact name.
#[derive(Debug, Clone, PartialEq)]
pub struct LicensePolicy {
    agreed_licenses: Vec<String>,
    acceptable_license_files: HashSet<String>,
    ignore_packages: HashSet<String>,
    unknown_license: String,
}

impl LicensePolicy {
    pub fn new(
        agreed_licenses: Vec<String>,
        acceptable_license_files: impl IntoIterator<Item = String>,
        ignore_packages: impl IntoIterator<Item = String>,
        unknown_license: String,
    ) -> Self {
        Self {
            agreed_licenses,
            acceptable_license_files: acceptable_license_files
                .into_iter()
                .map(|name| name.to_uppercase())
                .collect(),
            ignore_packages: ignore_packages.into_iter().collect(),
            unknown_license,
        }
    }

    pub fn agreed_licenses(&self) -> &[String] {
        &self.agreed_licenses
    }

    /// Whether a declared expression is the "undeterminable" placeholder
    ///
    /// The literal `UNKNOWN` always counts, in addition to the configured value.
    pub fn is_unknown(&self, declared: &str) -> bool {
        declared == DEFAULT_UNKNOWN_LICENSE || declared == self.unknown_license
    }

    /// Whether a bundled license file has an accepted base name
    ///
    /// `node_modules/pkg/license.md` is checked as `LICENSE`.
    pub fn accepts_license_file(&self, license_file: &Path) -> bool {
        license_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_uppercase())
            .is_some_and(|stem| self.acceptable_license_files.contains(&stem))
    }

    pub fn is_ignored(&self, package_name: &str) -> bool {
        self.ignore_packages.contains(package_name)
    }
}

impl Default for LicensePolicy {
    fn default() -> Self {
        Self::new(
            Vec::new(),
            DEFAULT_ACCEPTABLE_LICENSE_FILES
                .iter()
                .map(|name| name.to_string()),
            Vec::new(),
            DEFAULT_UNKNOWN_LICENSE.to_string(),
        )
    }
}
