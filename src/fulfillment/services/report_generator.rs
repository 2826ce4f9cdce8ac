use crate::fulfillment::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for generating report metadata
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with current timestamp and unique serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates report metadata for this tool, using the compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
