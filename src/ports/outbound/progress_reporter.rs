/// ProgressReporter port for user-facing diagnostics
///
/// Everything the pipeline wants the operator to see (scan progress,
/// recovered evaluation errors, merge warnings) goes through this port so
/// that stdout stays reserved for the report itself.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the package set
    ///
    /// # Arguments
    /// * `current` - Packages processed so far
    /// * `total` - Packages in the inventory
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
