use super::PackageRecord;
use std::path::Path;

/// A candidate license the evaluator could not compare against a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationFailure {
    pub candidate: String,
    pub declared: String,
    pub reason: String,
}

/// A package after license resolution
///
/// `agreed_license` is always decided here: `Some` is the policy license
/// the package satisfies, `None` means it does not satisfy policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPackage {
    record: PackageRecord,
    agreed_license: Option<String>,
    evaluation_failures: Vec<EvaluationFailure>,
}

impl ResolvedPackage {
    pub fn new(
        record: PackageRecord,
        agreed_license: Option<String>,
        evaluation_failures: Vec<EvaluationFailure>,
    ) -> Self {
        Self {
            record,
            agreed_license,
            evaluation_failures,
        }
    }

    /// A package that does not satisfy policy
    pub fn rejected(record: PackageRecord, evaluation_failures: Vec<EvaluationFailure>) -> Self {
        Self::new(record, None, evaluation_failures)
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn version(&self) -> &str {
        self.record.version()
    }

    pub fn repository(&self) -> Option<&str> {
        self.record.repository()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.record.publisher()
    }

    pub fn license_file(&self) -> Option<&Path> {
        self.record.license_file()
    }

    pub fn license_text(&self) -> Option<&str> {
        self.record.license_text()
    }

    pub fn agreed_license(&self) -> Option<&str> {
        self.agreed_license.as_deref()
    }

    pub fn is_accepted(&self) -> bool {
        self.agreed_license.is_some()
    }

    pub fn evaluation_failures(&self) -> &[EvaluationFailure] {
        &self.evaluation_failures
    }
}
