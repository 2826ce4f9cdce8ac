/// Formatter adapters for the fulfillment report formats
mod json_formatter;
mod markdown_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::application::dto::FulfillResponse;
    use crate::fulfillment::domain::{
        FulfillmentSummary, LicenseDeclaration, LicenseFulfillment, PackageIdentity,
        PackageRecord, ReportMetadata, ResolvedPackage,
    };

    pub fn fulfillment(
        identity: &str,
        repository: Option<&str>,
        agreed: Option<&str>,
        text: Option<&str>,
    ) -> LicenseFulfillment {
        let record = PackageRecord::new(
            PackageIdentity::parse(identity).unwrap(),
            LicenseDeclaration::expression("MIT"),
        )
        .with_repository(repository.map(String::from))
        .with_license_text(text.map(String::from));
        LicenseFulfillment::from_package(&ResolvedPackage::new(
            record,
            agreed.map(String::from),
            vec![],
        ))
    }

    pub fn response(fulfillments: Vec<LicenseFulfillment>) -> FulfillResponse {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00+00:00".to_string(),
            "license-fulfill".to_string(),
            "0.3.0".to_string(),
            "urn:uuid:00000000-0000-4000-8000-000000000000".to_string(),
        );
        let summary = FulfillmentSummary::new(fulfillments.len(), 0, &fulfillments);
        FulfillResponse::new(metadata, summary, fulfillments)
    }
}
