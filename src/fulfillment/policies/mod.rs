mod license_policy;

pub use license_policy::{
    LicensePolicy, DEFAULT_ACCEPTABLE_LICENSE_FILES, DEFAULT_UNKNOWN_LICENSE,
};
