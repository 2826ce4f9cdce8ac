use crate::fulfillment::domain::{FulfillmentKey, LicenseFulfillment, ResolvedPackage};
use crate::fulfillment::policies::LicensePolicy;
use indexmap::IndexMap;

/// A merge in which a version's license text replaced a different text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConflict {
    pub name: String,
    pub agreed_license: Option<String>,
    /// The version whose text was kept
    pub version: String,
}

/// Result of collapsing resolved packages into fulfillments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Fulfillments in the order their key was first seen
    pub fulfillments: Vec<LicenseFulfillment>,
    /// Packages skipped because their name is on the ignore list
    pub ignored: usize,
    pub text_conflicts: Vec<TextConflict>,
}

/// FulfillmentAggregator service grouping packages into fulfillments
///
/// Packages are grouped by name, lower-cased repository and agreed
/// license. Rejected packages form groups too, so denials can be audited.
/// Within a group, versions are kept in processing order and the license
/// text of the last processed version wins.
pub struct FulfillmentAggregator;

impl FulfillmentAggregator {
    pub fn aggregate(
        packages: impl IntoIterator<Item = ResolvedPackage>,
        policy: &LicensePolicy,
    ) -> Aggregation {
        let mut groups: IndexMap<FulfillmentKey, LicenseFulfillment> = IndexMap::new();
        let mut ignored = 0;
        let mut text_conflicts = Vec::new();

        for package in packages {
            if policy.is_ignored(package.name()) {
                ignored += 1;
                continue;
            }

            let key = FulfillmentKey::of(&package);
            match groups.get_mut(&key) {
                Some(fulfillment) => {
                    if fulfillment.license_text().is_some()
                        && fulfillment.license_text() != package.license_text()
                    {
                        text_conflicts.push(TextConflict {
                            name: package.name().to_string(),
                            agreed_license: package.agreed_license().map(String::from),
                            version: package.version().to_string(),
                        });
                    }
                    fulfillment.merge(&package);
                }
                None => {
                    groups.insert(key, LicenseFulfillment::from_package(&package));
                }
            }
        }

        Aggregation {
            fulfillments: groups.into_values().collect(),
            ignored,
            text_conflicts,
        }
    }
}
