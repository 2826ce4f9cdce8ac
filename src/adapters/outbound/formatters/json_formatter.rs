use crate::application::dto::FulfillResponse;
use crate::ports::outbound::FulfillmentFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the report as pretty-printed JSON
///
/// Shape: `{ "metadata": {...}, "summary": {...}, "fulfillments": [...] }`,
/// with camelCase keys. Rejected fulfillments carry `"agreedLicense": null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FulfillmentFormatter for JsonFormatter {
    fn format(&self, response: &FulfillResponse) -> Result<String> {
        let mut output = serde_json::to_string_pretty(response)?;
        output.push('\n');
        Ok(output)
    }
}
