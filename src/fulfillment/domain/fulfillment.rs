use super::ResolvedPackage;
use serde::Serialize;

/// Grouping key of a fulfillment: name, lower-cased repository, agreed license
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FulfillmentKey {
    name: String,
    repository: String,
    agreed_license: Option<String>,
}

impl FulfillmentKey {
    pub fn of(package: &ResolvedPackage) -> Self {
        Self {
            name: package.name().to_string(),
            repository: package.repository().unwrap_or_default().to_lowercase(),
            agreed_license: package.agreed_license().map(String::from),
        }
    }
}

/// LicenseFulfillment: one audit line covering every version of a package
/// that shares the same repository and agreed license
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseFulfillment {
    name: String,
    versions: Vec<String>,
    repository: Option<String>,
    publisher: Option<String>,
    license_text: Option<String>,
    agreed_license: Option<String>,
}

impl LicenseFulfillment {
    /// Seeds a fulfillment from the first package of its group
    pub fn from_package(package: &ResolvedPackage) -> Self {
        Self {
            name: package.name().to_string(),
            versions: vec![package.version().to_string()],
            repository: non_empty(package.repository()),
            publisher: non_empty(package.publisher()),
            license_text: package.license_text().map(String::from),
            agreed_license: package.agreed_license().map(String::from),
        }
    }

    /// Merges another package of the same group; its text replaces the current one
    pub fn merge(&mut self, package: &ResolvedPackage) {
        self.versions.push(package.version().to_string());
        self.license_text = package.license_text().map(String::from);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn license_text(&self) -> Option<&str> {
        self.license_text.as_deref()
    }

    pub fn agreed_license(&self) -> Option<&str> {
        self.agreed_license.as_deref()
    }

    pub fn is_accepted(&self) -> bool {
        self.agreed_license.is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

/// Counts describing one fulfillment run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentSummary {
    pub packages_scanned: usize,
    pub packages_ignored: usize,
    pub accepted_fulfillments: usize,
    pub rejected_fulfillments: usize,
}

impl FulfillmentSummary {
    pub fn new(
        packages_scanned: usize,
        packages_ignored: usize,
        fulfillments: &[LicenseFulfillment],
    ) -> Self {
        let accepted_fulfillments = fulfillments.iter().filter(|f| f.is_accepted()).count();
        Self {
            packages_scanned,
            packages_ignored,
            accepted_fulfillments,
            rejected_fulfillments: fulfillments.len() - accepted_fulfillments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fulfillment::domain::{LicenseDeclaration, PackageIdentity, PackageRecord};

    fn resolved(
        identity: &str,
        repository: Option<&str>,
        agreed: Option<&str>,
        text: Option<&str>,
    ) -> ResolvedPackage {
        let record = PackageRecord::new(
            PackageIdentity::parse(identity).unwrap(),
            LicenseDeclaration::expression("MIT"),
        )
        .with_repository(repository.map(String::from))
        .with_license_text(text.map(String::from));
        ResolvedPackage::new(record, agreed.map(String::from), vec![])
    }

    #[test]
    fn test_key_lowercases_repository() {
        let a = resolved("pkg@1.0.0", Some("https://GitHub.com/Org/Pkg"), Some("MIT"), None);
        let b = resolved("pkg@2.0.0", Some("https://github.com/org/pkg"), Some("MIT"), None);
        assert_eq!(FulfillmentKey::of(&a), FulfillmentKey::of(&b));
    }

    #[test]
    fn test_key_treats_missing_repository_as_empty() {
        let a = resolved("pkg@1.0.0", None, Some("MIT"), None);
        let b = resolved("pkg@2.0.0", Some(""), Some("MIT"), None);
        assert_eq!(FulfillmentKey::of(&a), FulfillmentKey::of(&b));
    }

    #[test]
    fn test_key_distinguishes_agreed_license() {
        let a = resolved("pkg@1.0.0", None, Some("MIT"), None);
        let b = resolved("pkg@2.0.0", None, None, None);
        assert_ne!(FulfillmentKey::of(&a), FulfillmentKey::of(&b));
    }

    #[test]
    fn test_from_package_maps_empty_strings_to_none() {
        let fulfillment = LicenseFulfillment::from_package(&resolved(
            "pkg@1.0.0",
            Some(""),
            Some("MIT"),
            Some("text"),
        ));
        assert_eq!(fulfillment.name(), "pkg");
        assert_eq!(fulfillment.versions(), ["1.0.0".to_string()]);
        assert!(fulfillment.repository().is_none());
        assert!(fulfillment.publisher().is_none());
        assert_eq!(fulfillment.license_text(), Some("text"));
        assert_eq!(fulfillment.agreed_license(), Some("MIT"));
    }

    #[test]
    fn test_merge_appends_version_and_overwrites_text() {
        let mut fulfillment =
            LicenseFulfillment::from_package(&resolved("pkg@1.0.0", None, Some("MIT"), Some("a")));
        fulfillment.merge(&resolved("pkg@2.0.0", None, Some("MIT"), None));

        assert_eq!(
            fulfillment.versions(),
            ["1.0.0".to_string(), "2.0.0".to_string()]
        );
        assert!(fulfillment.license_text().is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let fulfillment =
            LicenseFulfillment::from_package(&resolved("pkg@1.0.0", None, None, None));
        let json = serde_json::to_value(&fulfillment).unwrap();
        assert_eq!(json["name"], "pkg");
        assert!(json["agreedLicense"].is_null());
        assert!(json["licenseText"].is_null());
        assert_eq!(json["versions"][0], "1.0.0");
    }

    #[test]
    fn test_summary_counts() {
        let fulfillments = vec![
            LicenseFulfillment::from_package(&resolved("a@1.0.0", None, Some("MIT"), None)),
            LicenseFulfillment::from_package(&resolved("b@1.0.0", None, None, None)),
            LicenseFulfillment::from_package(&resolved("c@1.0.0", None, Some("ISC"), None)),
        ];
        let summary = FulfillmentSummary::new(5, 2, &fulfillments);
        assert_eq!(summary.packages_scanned, 5);
        assert_eq!(summary.packages_ignored, 2);
        assert_eq!(summary.accepted_fulfillments, 2);
        assert_eq!(summary.rejected_fulfillments, 1);
    }
}
