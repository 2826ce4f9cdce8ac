use crate::fulfillment::domain::{PackageOverride, PackageRecord};
use indexmap::IndexMap;

/// OverrideApplier service for manual package corrections
///
/// Overrides are keyed by the full `"<name>@<version>"` identity. Each
/// present override field replaces the record's field, an explicit null
/// clears it; packages without an override entry pass through unchanged.
pub struct OverrideApplier;

impl OverrideApplier {
    /// Applies the override configured for `record`'s identity, if any
    pub fn apply(
        record: PackageRecord,
        overrides: &IndexMap<String, PackageOverride>,
    ) -> PackageRecord {
        match overrides.get(&record.identity().to_string()) {
            Some(entry) => Self::merge(record, entry),
            None => record,
        }
    }

    fn merge(mut record: PackageRecord, entry: &PackageOverride) -> PackageRecord {
        if let Some(licenses) = &entry.licenses {
            record = record.with_licenses(licenses.clone());
        }
        if let Some(repository) = &entry.repository {
            record = record.with_repository(repository.clone());
        }
        if let Some(publisher) = &entry.publisher {
            record = record.with_publisher(publisher.clone());
        }
        if let Some(license_file) = &entry.license_file {
            record = record.with_license_file(license_file.clone());
        }
        if let Some(license_text) = &entry.license_text {
            record = record.with_license_text(license_text.clone());
        }
        if let Some(force_accept) = entry.force_accept {
            record = record.with_force_accept(force_accept);
        }
        if let Some(agreed_license) = &entry.agreed_license {
            record = record.with_agreed_license(agreed_license.clone());
        }
        record
    }
}
