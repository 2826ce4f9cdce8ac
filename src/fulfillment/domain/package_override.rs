use super::LicenseDeclaration;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Manual correction for one package identity
///
/// Every field is optional; a present field replaces the corresponding
/// field of the inventory record, an absent one leaves it alone. The
/// optional record fields distinguish an explicit `null`, which clears the
/// field (`Some(None)`), from an absent key (`None`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOverride {
    pub licenses: Option<LicenseDeclaration>,
    #[serde(default, deserialize_with = "nullable")]
    pub repository: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub publisher: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub license_file: Option<Option<PathBuf>>,
    #[serde(default, deserialize_with = "nullable")]
    pub license_text: Option<Option<String>>,
    pub force_accept: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub agreed_license: Option<Option<String>>,
}

/// Maps a present key to `Some`, keeping `null` as `Some(None)`
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
