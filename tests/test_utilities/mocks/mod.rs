/// Mock implementations for testing
mod mock_inventory_provider;
mod mock_license_evaluator;
mod mock_license_texts;
mod mock_progress_reporter;

pub use mock_inventory_provider::MockInventoryProvider;
pub use mock_license_evaluator::MockLicenseEvaluator;
pub use mock_license_texts::MockLicenseTexts;
pub use mock_progress_reporter::MockProgressReporter;
