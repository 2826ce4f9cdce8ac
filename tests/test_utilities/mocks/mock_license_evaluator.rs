use license_fulfill::prelude::*;

/// Mock LicenseEvaluator treating a declaration as ` OR `-separated ids
///
/// Declarations with unbalanced parentheses are reported as malformed.
pub struct MockLicenseEvaluator;

impl LicenseEvaluator for MockLicenseEvaluator {
    fn satisfies(&self, candidate: &str, declared: &str) -> Result<bool> {
        if declared.matches('(').count() != declared.matches(')').count() {
            anyhow::bail!("Invalid SPDX expression \"{}\"", declared);
        }
        Ok(declared
            .trim_matches(|c| c == '(' || c == ')')
            .split(" OR ")
            .any(|id| id.trim() == candidate))
    }
}
