/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod fulfill_request;
mod fulfill_response;
mod output_format;

pub use fulfill_request::{default_custom_format, FulfillRequest, FulfillRequestBuilder};
pub use fulfill_response::FulfillResponse;
pub use output_format::OutputFormat;
