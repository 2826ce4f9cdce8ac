use crate::ports::outbound::LicenseTextTable;
use indexmap::IndexMap;

/// SpdxLicenseTexts adapter serving canonical license texts
///
/// Texts configured under `license_texts` take precedence; everything
/// else comes from the SPDX license list bundled with the `spdx` crate.
#[derive(Debug, Clone, Default)]
pub struct SpdxLicenseTexts {
    custom: IndexMap<String, String>,
}

impl SpdxLicenseTexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom_texts(custom: IndexMap<String, String>) -> Self {
        Self { custom }
    }
}

impl LicenseTextTable for SpdxLicenseTexts {
    fn license_text(&self, license_id: &str) -> Option<String> {
        if let Some(text) = self.custom.get(license_id) {
            return Some(text.clone());
        }
        spdx::license_id(license_id).map(|id| id.text().to_string())
    }
}
