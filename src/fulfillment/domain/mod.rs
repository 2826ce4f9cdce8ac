pub mod fulfillment;
pub mod package;
pub mod package_override;
pub mod package_record;
pub mod report_metadata;
pub mod resolved_package;

pub use fulfillment::{FulfillmentKey, FulfillmentSummary, LicenseFulfillment};
pub use package::{LicenseDeclaration, PackageIdentity};
pub use package_override::PackageOverride;
pub use package_record::PackageRecord;
pub use report_metadata::ReportMetadata;
pub use resolved_package::{EvaluationFailure, ResolvedPackage};
