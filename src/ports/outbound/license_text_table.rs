/// LicenseTextTable port: canonical legal text per SPDX identifier
pub trait LicenseTextTable {
    /// Returns the full license text for an SPDX identifier, if known
    fn license_text(&self, license_id: &str) -> Option<String>;
}
