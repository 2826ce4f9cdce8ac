mod fulfillment_aggregator;
mod license_resolver;
mod override_applier;
mod report_generator;

pub use fulfillment_aggregator::{Aggregation, FulfillmentAggregator, TextConflict};
pub use license_resolver::LicenseResolver;
pub use override_applier::OverrideApplier;
pub use report_generator::ReportGenerator;
