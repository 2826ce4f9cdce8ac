/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (inventory, SPDX data, console, etc.).
pub mod formatter;
pub mod inventory_provider;
pub mod license_evaluator;
pub mod license_text_table;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::FulfillmentFormatter;
pub use inventory_provider::{Inventory, InventoryProvider, InventoryQuery};
pub use license_evaluator::LicenseEvaluator;
pub use license_text_table::LicenseTextTable;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
