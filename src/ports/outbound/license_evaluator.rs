use crate::shared::Result;

/// LicenseEvaluator port for SPDX expression satisfaction
pub trait LicenseEvaluator {
    /// Returns whether the `candidate` license (a policy entry) is satisfied
    /// by the package's `declared` expression
    ///
    /// e.g. candidate `MIT` is satisfied by declared `(MIT OR Apache-2.0)`.
    ///
    /// # Errors
    /// Returns an error when either expression is malformed.
    fn satisfies(&self, candidate: &str, declared: &str) -> Result<bool>;
}
