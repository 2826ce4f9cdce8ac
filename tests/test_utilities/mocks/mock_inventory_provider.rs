use license_fulfill::prelude::*;

/// Mock InventoryProvider returning a fixed package list
pub struct MockInventoryProvider {
    packages: Vec<PackageRecord>,
    error: Option<String>,
}

impl MockInventoryProvider {
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            error: None,
        }
    }

    /// Adds a package with a plain license expression
    pub fn with_package(mut self, identity: &str, licenses: &str) -> Self {
        self.packages.push(PackageRecord::new(
            PackageIdentity::parse(identity).unwrap(),
            LicenseDeclaration::expression(licenses),
        ));
        self
    }

    pub fn with_record(mut self, record: PackageRecord) -> Self {
        self.packages.push(record);
        self
    }

    /// Makes every scan fail with the given message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }
}

#[async_trait::async_trait]
impl InventoryProvider for MockInventoryProvider {
    async fn scan(&self, _query: &InventoryQuery) -> Result<Inventory> {
        if let Some(ref message) = self.error {
            anyhow::bail!("{}", message);
        }
        Ok(self.packages.clone())
    }
}
