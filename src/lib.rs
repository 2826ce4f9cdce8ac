//! license-fulfill - License policy fulfillment for dependency inventories
//!
//! This library matches the declared license of every installed package
//! against an organization's allow-list, applies manual overrides, and
//! collapses the result into deduplicated, audit-ready fulfillment records.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`fulfillment`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_fulfill::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = FulfillLicensesUseCase::new(
//!     JsonInventoryReader::new(),
//!     SpdxEvaluator::new(),
//!     SpdxLicenseTexts::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = FulfillRequest::builder()
//!     .start_path("licenses.json")
//!     .agreed_license("MIT")
//!     .agreed_license("Apache-2.0")
//!     .build()?;
//! let response = use_case.execute(&request).await?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod fulfillment;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::inventory::JsonInventoryReader;
    pub use crate::adapters::outbound::spdx::{SpdxEvaluator, SpdxLicenseTexts};
    pub use crate::application::dto::{FulfillRequest, FulfillResponse, OutputFormat};
    pub use crate::application::use_cases::FulfillLicensesUseCase;
    pub use crate::fulfillment::domain::{
        FulfillmentSummary, LicenseDeclaration, LicenseFulfillment, PackageIdentity,
        PackageOverride, PackageRecord, ReportMetadata, ResolvedPackage,
    };
    pub use crate::fulfillment::policies::LicensePolicy;
    pub use crate::fulfillment::services::{
        FulfillmentAggregator, LicenseResolver, OverrideApplier,
    };
    pub use crate::ports::outbound::{
        FulfillmentFormatter, Inventory, InventoryProvider, InventoryQuery, LicenseEvaluator,
        LicenseTextTable, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
