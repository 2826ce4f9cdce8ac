use crate::fulfillment::domain::{LicenseDeclaration, PackageIdentity, PackageRecord};
use crate::ports::outbound::{Inventory, InventoryProvider, InventoryQuery};
use crate::shared::error::FulfillError;
use crate::shared::security::{read_regular_file, MAX_INVENTORY_FILE_SIZE, MAX_LICENSE_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File looked up when a start path is a directory
pub const INVENTORY_FILENAME: &str = "licenses.json";

const LICENSE_TEXT_FIELD: &str = "licenseText";

/// One entry of a license-checker style document
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    licenses: Option<Value>,
    repository: Option<String>,
    publisher: Option<String>,
    license_file: Option<PathBuf>,
    license_text: Option<String>,
    #[serde(default)]
    dev_dependency: bool,
}

/// JsonInventoryReader adapter for license-checker style JSON documents
///
/// A document is an object mapping `"<name>@<version>"` to package
/// metadata, e.g. the output of `license-checker --json`. Key order is
/// kept and becomes the inventory order.
pub struct JsonInventoryReader;

impl JsonInventoryReader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a start path to the inventory document it designates
    fn locate_document(start_path: &Path) -> Result<PathBuf> {
        let document = if start_path.is_dir() {
            start_path.join(INVENTORY_FILENAME)
        } else {
            start_path.to_path_buf()
        };

        if !document.exists() {
            return Err(FulfillError::InventoryNotFound {
                path: document,
                suggestion: format!(
                    "Generate one with `npx license-checker --json > {}` or pass its location with --path",
                    INVENTORY_FILENAME
                ),
            }
            .into());
        }

        Ok(document)
    }

    fn read_document(path: &Path) -> Result<IndexMap<String, RawEntry>> {
        let content = read_regular_file(path, "inventory document", MAX_INVENTORY_FILE_SIZE)?;

        serde_json::from_str(&content).map_err(|e| {
            FulfillError::InventoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn to_record(
        identity: PackageIdentity,
        entry: RawEntry,
        document_dir: &Path,
        query: &InventoryQuery,
    ) -> PackageRecord {
        let licenses = Self::to_declaration(entry.licenses, &query.unknown);

        // Bundled license files are reported relative to the document
        let license_file = entry.license_file.map(|file| {
            if file.is_relative() {
                document_dir.join(file)
            } else {
                file
            }
        });

        let license_text = entry.license_text.filter(|text| !text.is_empty()).or_else(|| {
            if !query.custom_format.contains_key(LICENSE_TEXT_FIELD) {
                return None;
            }
            // Unreadable files leave the text empty for the resolver to backfill
            license_file.as_deref().and_then(|file| {
                read_regular_file(file, "license file", MAX_LICENSE_FILE_SIZE).ok()
            })
        });

        PackageRecord::new(identity, licenses)
            .with_repository(entry.repository.or_else(|| Self::default_for(query, "repository")))
            .with_publisher(entry.publisher.or_else(|| Self::default_for(query, "publisher")))
            .with_license_file(license_file)
            .with_license_text(license_text.or_else(|| Self::default_for(query, LICENSE_TEXT_FIELD)))
    }

    /// Normalizes the raw `licenses` value
    ///
    /// A missing or null value becomes the unknown placeholder. Arrays and
    /// other non-string values are kept in a form policy never accepts.
    fn to_declaration(licenses: Option<Value>, unknown: &str) -> LicenseDeclaration {
        match licenses {
            None | Some(Value::Null) => LicenseDeclaration::expression(unknown),
            Some(Value::String(expression)) => LicenseDeclaration::Expression(expression),
            Some(Value::Array(items)) => LicenseDeclaration::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(license) => license,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Some(_) => LicenseDeclaration::Missing,
        }
    }

    /// Non-empty string default configured for a field
    fn default_for(query: &InventoryQuery, field: &str) -> Option<String> {
        query
            .custom_format
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(String::from)
    }
}

impl Default for JsonInventoryReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryProvider for JsonInventoryReader {
    async fn scan(&self, query: &InventoryQuery) -> Result<Inventory> {
        let mut inventory = Vec::new();
        let mut seen: HashSet<PackageIdentity> = HashSet::new();

        for start_path in &query.start_paths {
            let document = Self::locate_document(start_path)?;
            let document_dir = document
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();

            for (key, entry) in Self::read_document(&document)? {
                if query.production && entry.dev_dependency {
                    continue;
                }

                let identity = PackageIdentity::parse(&key)
                    .with_context(|| format!("Invalid entry in {}", document.display()))?;
                if !seen.insert(identity.clone()) {
                    continue;
                }

                inventory.push(Self::to_record(identity, entry, &document_dir, query));
            }
        }

        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::default_custom_format;
    use std::fs;
    use tempfile::TempDir;

    fn query(paths: Vec<PathBuf>) -> InventoryQuery {
        InventoryQuery {
            start_paths: paths,
            production: false,
            unknown: "UNKNOWN".to_string(),
            custom_format: default_custom_format(),
        }
    }

    fn write_inventory(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(INVENTORY_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_scan_keeps_document_order() {
        let temp_dir = TempDir::new().unwrap();
        write_inventory(
            temp_dir.path(),
            r#"{
                "zeta@1.0.0": { "licenses": "MIT", "repository": "https://github.com/x/zeta" },
                "@scope/alpha@2.1.0": { "licenses": "ISC", "publisher": "Alice" }
            }"#,
        );

        let inventory = JsonInventoryReader::new()
            .scan(&query(vec![temp_dir.path().to_path_buf()]))
            .await
            .unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].name(), "zeta");
        assert_eq!(inventory[0].repository(), Some("https://github.com/x/zeta"));
        assert_eq!(inventory[1].name(), "@scope/alpha");
        assert_eq!(inventory[1].version(), "2.1.0");
        assert_eq!(inventory[1].publisher(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_long_prerelease_version_is_scanned() {
        let dir = TempDir::new().unwrap();
        let version = format!("1.0.0-{}", "rc".repeat(60));
        write_inventory(
            dir.path(),
            &format!(r#"{{"nightly@{}": {{"licenses": "MIT"}}}}"#, version),
        );

        let inventory = JsonInventoryReader::new()
            .scan(&query(vec![dir.path().to_path_buf()]))
            .await
            .unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].version(), version);
    }

    #[tokio::test]
    async fn test_missing_licenses_becomes_unknown_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(temp_dir.path(), r#"{ "pkg@1.0.0": {} }"#);
        let mut query = query(vec![path]);
        query.unknown = "UNDETERMINED".to_string();

        let inventory = JsonInventoryReader::new().scan(&query).await.unwrap();

        assert_eq!(
            inventory[0].licenses(),
            &LicenseDeclaration::expression("UNDETERMINED")
        );
    }

    #[tokio::test]
    async fn test_non_string_licenses_are_not_expressions() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(
            temp_dir.path(),
            r#"{
                "legacy@0.1.0": { "licenses": ["MIT", "Apache-2.0"] },
                "odd@0.1.0": { "licenses": 42 }
            }"#,
        );

        let inventory = JsonInventoryReader::new()
            .scan(&query(vec![path]))
            .await
            .unwrap();

        assert_eq!(
            inventory[0].licenses(),
            &LicenseDeclaration::List(vec!["MIT".to_string(), "Apache-2.0".to_string()])
        );
        assert_eq!(inventory[1].licenses(), &LicenseDeclaration::Missing);
    }

    #[tokio::test]
    async fn test_production_skips_dev_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(
            temp_dir.path(),
            r#"{
                "runtime@1.0.0": { "licenses": "MIT" },
                "jest@29.0.0": { "licenses": "MIT", "devDependency": true }
            }"#,
        );
        let mut query = query(vec![path]);

        let all = JsonInventoryReader::new().scan(&query).await.unwrap();
        assert_eq!(all.len(), 2);

        query.production = true;
        let production = JsonInventoryReader::new().scan(&query).await.unwrap();
        assert_eq!(production.len(), 1);
        assert_eq!(production[0].name(), "runtime");
    }

    #[tokio::test]
    async fn test_license_file_contents_are_read() {
        let temp_dir = TempDir::new().unwrap();
        let pkg_dir = temp_dir.path().join("node_modules").join("pkg");
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(pkg_dir.join("LICENSE"), "Copyright (c) 2020 pkg authors").unwrap();
        let path = write_inventory(
            temp_dir.path(),
            r#"{ "pkg@1.0.0": { "licenses": "MIT", "licenseFile": "node_modules/pkg/LICENSE" } }"#,
        );

        let inventory = JsonInventoryReader::new()
            .scan(&query(vec![path]))
            .await
            .unwrap();

        assert_eq!(inventory[0].license_file(), Some(pkg_dir.join("LICENSE").as_path()));
        assert_eq!(
            inventory[0].license_text(),
            Some("Copyright (c) 2020 pkg authors")
        );
    }

    #[tokio::test]
    async fn test_license_file_is_not_read_without_text_field() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("LICENSE"), "text").unwrap();
        let path = write_inventory(
            temp_dir.path(),
            r#"{ "pkg@1.0.0": { "licenses": "MIT", "licenseFile": "LICENSE" } }"#,
        );
        let mut query = query(vec![path]);
        query.custom_format = IndexMap::new();

        let inventory = JsonInventoryReader::new().scan(&query).await.unwrap();

        assert!(inventory[0].license_file().is_some());
        assert!(inventory[0].license_text().is_none());
    }

    #[tokio::test]
    async fn test_unreadable_license_file_leaves_text_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(
            temp_dir.path(),
            r#"{ "pkg@1.0.0": { "licenses": "MIT", "licenseFile": "missing/LICENSE" } }"#,
        );

        let inventory = JsonInventoryReader::new()
            .scan(&query(vec![path]))
            .await
            .unwrap();

        assert!(inventory[0].license_text().is_none());
    }

    #[tokio::test]
    async fn test_custom_format_defaults_fill_missing_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(
            temp_dir.path(),
            r#"{
                "bare@1.0.0": { "licenses": "MIT" },
                "full@1.0.0": { "licenses": "MIT", "publisher": "Bob" }
            }"#,
        );
        let mut query = query(vec![path]);
        query.custom_format = IndexMap::from([
            ("publisher".to_string(), Value::String("n/a".to_string())),
            ("repository".to_string(), Value::String(String::new())),
        ]);

        let inventory = JsonInventoryReader::new().scan(&query).await.unwrap();

        assert_eq!(inventory[0].publisher(), Some("n/a"));
        assert!(inventory[0].repository().is_none());
        assert_eq!(inventory[1].publisher(), Some("Bob"));
    }

    #[tokio::test]
    async fn test_first_occurrence_wins_across_roots() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_inventory(
            first.path(),
            r#"{ "shared@1.0.0": { "licenses": "MIT", "publisher": "first" } }"#,
        );
        write_inventory(
            second.path(),
            r#"{
                "shared@1.0.0": { "licenses": "MIT", "publisher": "second" },
                "other@1.0.0": { "licenses": "ISC" }
            }"#,
        );

        let inventory = JsonInventoryReader::new()
            .scan(&query(vec![
                first.path().to_path_buf(),
                second.path().to_path_buf(),
            ]))
            .await
            .unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].publisher(), Some("first"));
        assert_eq!(inventory[1].name(), "other");
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let result = JsonInventoryReader::new()
            .scan(&query(vec![temp_dir.path().to_path_buf()]))
            .await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Inventory not found"));
        assert!(err.contains(INVENTORY_FILENAME));
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(temp_dir.path(), "[1, 2, 3]");

        let result = JsonInventoryReader::new().scan(&query(vec![path])).await;

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse inventory"));
    }

    #[tokio::test]
    async fn test_malformed_identity_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_inventory(temp_dir.path(), r#"{ "no-version": { "licenses": "MIT" } }"#);

        let result = JsonInventoryReader::new().scan(&query(vec![path])).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid entry in"));
        assert!(format!("{:#}", err).contains("no-version"));
    }
}
