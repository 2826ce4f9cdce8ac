/// Use cases module containing application business logic orchestration
mod fulfill_licenses;

pub use fulfill_licenses::FulfillLicensesUseCase;
