use crate::fulfillment::domain::{EvaluationFailure, PackageRecord, ResolvedPackage};
use crate::fulfillment::policies::LicensePolicy;
use crate::ports::outbound::{LicenseEvaluator, LicenseTextTable};

/// LicenseResolver service deciding whether a package satisfies policy
///
/// Resolution steps, in order:
/// 1. A declaration that is not a plain expression, or is the unknown
///    placeholder, is rejected. This runs before the force-accept check.
/// 2. Force-accepted packages skip matching and keep the agreed license
///    set by their override.
/// 3. Otherwise the first agreed license the declaration satisfies wins;
///    no match means rejection.
/// 4. A bundled license file with an unrecognized name is dropped together
///    with its text.
/// 5. Missing text is backfilled from the canonical license-text table.
pub struct LicenseResolver<'a, E: ?Sized, T: ?Sized> {
    policy: &'a LicensePolicy,
    evaluator: &'a E,
    license_texts: &'a T,
}

impl<'a, E, T> LicenseResolver<'a, E, T>
where
    E: LicenseEvaluator + ?Sized,
    T: LicenseTextTable + ?Sized,
{
    pub fn new(policy: &'a LicensePolicy, evaluator: &'a E, license_texts: &'a T) -> Self {
        Self {
            policy,
            evaluator,
            license_texts,
        }
    }

    /// Resolves one post-override record
    pub fn resolve(&self, record: PackageRecord) -> ResolvedPackage {
        let Some(declared) = record
            .licenses()
            .as_expression()
            .filter(|declared| !self.policy.is_unknown(declared))
            .map(String::from)
        else {
            return ResolvedPackage::rejected(record, Vec::new());
        };

        let mut failures = Vec::new();
        let agreed_license = if record.force_accept() {
            record.agreed_license().map(String::from)
        } else {
            match self.first_satisfied(&declared, &mut failures) {
                Some(candidate) => Some(candidate),
                None => return ResolvedPackage::rejected(record, failures),
            }
        };

        let record = self.validate_license_file(record);
        let record = self.backfill_license_text(record, agreed_license.as_deref());

        ResolvedPackage::new(record, agreed_license, failures)
    }

    /// Returns the first agreed license satisfied by `declared`
    ///
    /// A candidate the evaluator cannot compare counts as not satisfied.
    fn first_satisfied(
        &self,
        declared: &str,
        failures: &mut Vec<EvaluationFailure>,
    ) -> Option<String> {
        for candidate in self.policy.agreed_licenses() {
            match self.evaluator.satisfies(candidate, declared) {
                Ok(true) => return Some(candidate.clone()),
                Ok(false) => {}
                Err(e) => failures.push(EvaluationFailure {
                    candidate: candidate.clone(),
                    declared: declared.to_string(),
                    reason: e.to_string(),
                }),
            }
        }
        None
    }

    fn validate_license_file(&self, record: PackageRecord) -> PackageRecord {
        match record.license_file() {
            Some(license_file) if !self.policy.accepts_license_file(license_file) => record
                .with_license_file(None)
                .with_license_text(None),
            _ => record,
        }
    }

    fn backfill_license_text(
        &self,
        record: PackageRecord,
        agreed_license: Option<&str>,
    ) -> PackageRecord {
        let Some(agreed_license) = agreed_license else {
            return record;
        };
        if record.license_text().is_some() {
            return record;
        }
        match self.license_texts.license_text(agreed_license) {
            Some(text) => record.with_license_text(Some(text)),
            None => record,
        }
    }
}
