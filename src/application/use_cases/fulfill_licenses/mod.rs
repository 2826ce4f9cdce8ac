use crate::application::dto::{FulfillRequest, FulfillResponse};
use crate::fulfillment::domain::{FulfillmentSummary, ResolvedPackage};
use crate::fulfillment::policies::LicensePolicy;
use crate::fulfillment::services::{
    Aggregation, FulfillmentAggregator, LicenseResolver, OverrideApplier, ReportGenerator,
};
use crate::ports::outbound::{
    Inventory, InventoryProvider, LicenseEvaluator, LicenseTextTable, ProgressReporter,
};
use crate::shared::Result;
use std::collections::HashSet;

/// FulfillLicensesUseCase - Core use case for license fulfillment
///
/// This use case orchestrates the fulfillment pipeline using generic
/// dependency injection for all infrastructure dependencies:
///
/// 1. scan the package inventory (the only asynchronous step),
/// 2. apply per-package overrides,
/// 3. resolve every package against the license policy,
/// 4. aggregate resolved packages into fulfillment records.
///
/// # Type Parameters
/// * `IP` - InventoryProvider implementation
/// * `LE` - LicenseEvaluator implementation
/// * `LT` - LicenseTextTable implementation
/// * `PR` - ProgressReporter implementation
pub struct FulfillLicensesUseCase<IP, LE, LT, PR> {
    inventory_provider: IP,
    license_evaluator: LE,
    license_texts: LT,
    progress_reporter: PR,
}

impl<IP, LE, LT, PR> FulfillLicensesUseCase<IP, LE, LT, PR>
where
    IP: InventoryProvider,
    LE: LicenseEvaluator,
    LT: LicenseTextTable,
    PR: ProgressReporter,
{
    /// Creates a new FulfillLicensesUseCase with injected dependencies
    pub fn new(
        inventory_provider: IP,
        license_evaluator: LE,
        license_texts: LT,
        progress_reporter: PR,
    ) -> Self {
        Self {
            inventory_provider,
            license_evaluator,
            license_texts,
            progress_reporter,
        }
    }

    /// Executes the fulfillment use case
    ///
    /// # Errors
    /// Returns the inventory provider's error unchanged if the scan fails;
    /// no partial report is produced.
    pub async fn execute(&self, request: &FulfillRequest) -> Result<FulfillResponse> {
        // Step 1: Acquire the inventory
        let inventory = self.scan_inventory(request).await?;
        let packages_scanned = inventory.len();

        self.warn_unmatched_overrides(request, &inventory);

        // Step 2 + 3: Apply overrides and resolve against policy
        let policy = request.policy();
        let resolved = self.resolve_packages(request, &policy, inventory);

        // Step 4: Aggregate
        let aggregation = FulfillmentAggregator::aggregate(resolved, &policy);
        self.report_aggregation(&aggregation);

        let summary = FulfillmentSummary::new(
            packages_scanned,
            aggregation.ignored,
            &aggregation.fulfillments,
        );
        self.progress_reporter.report_completion(&format!(
            "✅ License fulfillment complete: {} accepted, {} rejected",
            summary.accepted_fulfillments, summary.rejected_fulfillments
        ));

        Ok(FulfillResponse::new(
            ReportGenerator::generate_default_metadata(),
            summary,
            aggregation.fulfillments,
        ))
    }

    /// Scans the inventory, reporting progress
    async fn scan_inventory(&self, request: &FulfillRequest) -> Result<Inventory> {
        let roots: Vec<String> = request
            .start_paths
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        self.progress_reporter.report(&format!(
            "📦 Scanning package inventory from: {}",
            roots.join(", ")
        ));

        let inventory = self
            .inventory_provider
            .scan(&request.inventory_query())
            .await?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", inventory.len()));

        Ok(inventory)
    }

    /// Applies overrides and resolves each package, in inventory order
    fn resolve_packages(
        &self,
        request: &FulfillRequest,
        policy: &LicensePolicy,
        inventory: Inventory,
    ) -> Vec<ResolvedPackage> {
        self.progress_reporter
            .report("🔍 Resolving licenses against policy...");

        let resolver = LicenseResolver::new(policy, &self.license_evaluator, &self.license_texts);
        let total = inventory.len();
        let mut resolved = Vec::with_capacity(total);

        for (idx, record) in inventory.into_iter().enumerate() {
            let record = OverrideApplier::apply(record, &request.overrides);
            let package = resolver.resolve(record);

            for failure in package.evaluation_failures() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not compare {} against \"{}\" for {}@{}: {}",
                    failure.candidate,
                    failure.declared,
                    package.name(),
                    package.version(),
                    failure.reason
                ));
            }

            self.progress_reporter
                .report_progress(idx + 1, total, Some(package.name()));
            resolved.push(package);
        }

        resolved
    }

    /// Warns about override and ignore entries that matched nothing
    fn warn_unmatched_overrides(&self, request: &FulfillRequest, inventory: &Inventory) {
        let identities: HashSet<String> = inventory
            .iter()
            .map(|record| record.identity().to_string())
            .collect();
        let names: HashSet<&str> = inventory.iter().map(|record| record.name()).collect();

        for identity in request.overrides.keys() {
            if !identities.contains(identity) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Override for '{}' did not match any package.",
                    identity
                ));
            }
        }

        for name in &request.ignore_packages {
            if !names.contains(name.as_str()) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Ignored package '{}' did not match any package.",
                    name
                ));
            }
        }
    }

    fn report_aggregation(&self, aggregation: &Aggregation) {
        if aggregation.ignored > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} package(s) based on ignore list",
                aggregation.ignored
            ));
        }

        for conflict in &aggregation.text_conflicts {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} ({}) has differing license texts across versions; keeping the text of {}",
                conflict.name,
                conflict.agreed_license.as_deref().unwrap_or("rejected"),
                conflict.version
            ));
        }
    }
}
