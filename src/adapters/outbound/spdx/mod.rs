/// SPDX adapters backed by the `spdx` crate's embedded license list
mod spdx_evaluator;
mod spdx_license_texts;

pub use spdx_evaluator::SpdxEvaluator;
pub use spdx_license_texts::SpdxLicenseTexts;
