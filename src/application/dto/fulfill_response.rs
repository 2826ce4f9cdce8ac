use crate::fulfillment::domain::{FulfillmentSummary, LicenseFulfillment, ReportMetadata};
use serde::Serialize;

/// FulfillResponse - Internal response DTO from the fulfillment use case
///
/// Formatters render this directly; the JSON formatter serializes it as is.
#[derive(Debug, Clone, Serialize)]
pub struct FulfillResponse {
    /// Report metadata (timestamp, tool info, serial number)
    pub metadata: ReportMetadata,
    pub summary: FulfillmentSummary,
    /// One entry per (name, repository, agreed license), in first-seen order
    pub fulfillments: Vec<LicenseFulfillment>,
}

impl FulfillResponse {
    pub fn new(
        metadata: ReportMetadata,
        summary: FulfillmentSummary,
        fulfillments: Vec<LicenseFulfillment>,
    ) -> Self {
        Self {
            metadata,
            summary,
            fulfillments,
        }
    }

    /// Fulfillments whose packages satisfy policy
    pub fn accepted(&self) -> impl Iterator<Item = &LicenseFulfillment> {
        self.fulfillments.iter().filter(|f| f.is_accepted())
    }

    /// Fulfillments whose packages do not satisfy policy
    pub fn rejected(&self) -> impl Iterator<Item = &LicenseFulfillment> {
        self.fulfillments.iter().filter(|f| !f.is_accepted())
    }

    /// Whether any reported package violates policy
    pub fn has_violations(&self) -> bool {
        self.summary.rejected_fulfillments > 0
    }
}
