use crate::application::dto::FulfillResponse;
use crate::shared::Result;

/// FulfillmentFormatter port for rendering a fulfillment report
///
/// This port abstracts the formatting logic for different report formats
/// (JSON, Markdown, etc.).
pub trait FulfillmentFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, response: &FulfillResponse) -> Result<String>;
}
