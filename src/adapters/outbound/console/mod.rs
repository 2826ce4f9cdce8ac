/// Console adapters for user-facing diagnostics
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
