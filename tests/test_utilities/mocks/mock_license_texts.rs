use license_fulfill::prelude::*;
use std::collections::HashMap;

/// Mock LicenseTextTable backed by a map
#[derive(Default)]
pub struct MockLicenseTexts {
    texts: HashMap<String, String>,
}

impl MockLicenseTexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, license_id: &str, text: &str) -> Self {
        self.texts.insert(license_id.to_string(), text.to_string());
        self
    }
}

impl LicenseTextTable for MockLicenseTexts {
    fn license_text(&self, license_id: &str) -> Option<String> {
        self.texts.get(license_id).cloned()
    }
}
