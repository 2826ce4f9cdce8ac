use crate::shared::error::FulfillError;
use crate::shared::Result;

/// Maximum length for package names (npm registry limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Maximum length for package versions (npm semver limit)
const MAX_VERSION_LENGTH: usize = 256;

/// Identity of one installed package version, written `"<name>@<version>"`
///
/// The name may itself contain `@` (scoped names such as `@babel/core`),
/// so the identity is always split at the last `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentity {
    name: String,
    version: String,
}

impl PackageIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = version.into();
        let identity = format!("{}@{}", name, version);

        if name.is_empty() {
            return Err(invalid(&identity, "package name is empty"));
        }
        if version.is_empty() {
            return Err(invalid(&identity, "package version is empty"));
        }

        // Security: Length limits to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(
                &identity,
                &format!(
                    "package name is too long ({} bytes, maximum {})",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }
        if version.len() > MAX_VERSION_LENGTH {
            return Err(invalid(
                &identity,
                &format!(
                    "package version is too long ({} bytes, maximum {})",
                    version.len(),
                    MAX_VERSION_LENGTH
                ),
            ));
        }

        Ok(Self { name, version })
    }

    /// Parses `"<name>@<version>"`, splitting at the last `@`
    pub fn parse(identity: &str) -> Result<Self> {
        let Some((name, version)) = identity.rsplit_once('@') else {
            return Err(invalid(identity, "missing '@<version>' suffix"));
        };
        Self::new(name, version)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

fn invalid(identity: &str, reason: &str) -> anyhow::Error {
    FulfillError::InvalidIdentity {
        identity: identity.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// A package's declared license, as reported by the inventory
///
/// Only a plain string expression can be matched against policy; the
/// other shapes always resolve to "does not satisfy policy".
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum LicenseDeclaration {
    /// A single SPDX expression such as `"MIT"` or `"(MIT OR Apache-2.0)"`
    Expression(String),
    /// A list of licenses, as emitted for packages with a legacy `licenses` array
    List(Vec<String>),
    /// Nothing declared
    Missing,
}

impl LicenseDeclaration {
    pub fn expression(expression: impl Into<String>) -> Self {
        Self::Expression(expression.into())
    }

    /// Returns the expression if this declaration is a plain string
    pub fn as_expression(&self) -> Option<&str> {
        match self {
            Self::Expression(expression) => Some(expression),
            Self::List(_) | Self::Missing => None,
        }
    }
}

impl std::fmt::Display for LicenseDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression(expression) => write!(f, "{}", expression),
            Self::List(licenses) => write!(f, "[{}]", licenses.join(", ")),
            Self::Missing => write!(f, "(none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_identity() {
        let identity = PackageIdentity::parse("left-pad@1.3.0").unwrap();
        assert_eq!(identity.name(), "left-pad");
        assert_eq!(identity.version(), "1.3.0");
    }

    #[test]
    fn test_parse_scoped_identity_splits_at_last_at() {
        let identity = PackageIdentity::parse("@babel/core@7.24.0").unwrap();
        assert_eq!(identity.name(), "@babel/core");
        assert_eq!(identity.version(), "7.24.0");
    }

    #[test]
    fn test_parse_identity_without_version() {
        let result = PackageIdentity::parse("left-pad");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("missing '@<version>' suffix"));
    }

    #[test]
    fn test_parse_scoped_identity_without_version() {
        // The only '@' is the scope marker, leaving an empty name
        let result = PackageIdentity::parse("@scope/pkg");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_identity_with_empty_version() {
        assert!(PackageIdentity::parse("left-pad@").is_err());
    }

    #[test]
    fn test_identity_name_too_long() {
        let name = "a".repeat(MAX_PACKAGE_NAME_LENGTH + 1);
        assert!(PackageIdentity::new(name, "1.0.0").is_err());
    }

    #[test]
    fn test_long_prerelease_version_is_accepted() {
        let version = format!("1.0.0-{}", "a".repeat(120));
        let identity = PackageIdentity::parse(&format!("pkg@{}", version)).unwrap();
        assert_eq!(identity.version(), version);
    }

    #[test]
    fn test_identity_version_too_long() {
        let version = "1".repeat(MAX_VERSION_LENGTH + 1);
        let result = PackageIdentity::new("pkg", version);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("package version is too long"));
    }

    #[test]
    fn test_identity_display_round_trips() {
        let identity = PackageIdentity::parse("@types/node@20.11.5").unwrap();
        assert_eq!(identity.to_string(), "@types/node@20.11.5");
    }

    #[test]
    fn test_declaration_as_expression() {
        assert_eq!(
            LicenseDeclaration::expression("MIT").as_expression(),
            Some("MIT")
        );
        assert_eq!(
            LicenseDeclaration::List(vec!["MIT".to_string()]).as_expression(),
            None
        );
        assert_eq!(LicenseDeclaration::Missing.as_expression(), None);
    }

    #[test]
    fn test_declaration_deserialize_shapes() {
        let expression: LicenseDeclaration = serde_json::from_str("\"ISC\"").unwrap();
        assert_eq!(expression, LicenseDeclaration::expression("ISC"));

        let list: LicenseDeclaration = serde_json::from_str("[\"MIT\", \"ISC\"]").unwrap();
        assert_eq!(
            list,
            LicenseDeclaration::List(vec!["MIT".to_string(), "ISC".to_string()])
        );

        let missing: LicenseDeclaration = serde_json::from_str("null").unwrap();
        assert_eq!(missing, LicenseDeclaration::Missing);
    }
}
