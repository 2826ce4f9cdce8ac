use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean report,
/// a report containing policy violations, and outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated (and, with `--check`, no violations)
    Success = 0,
    /// `--check` was given and at least one package does not satisfy policy
    PolicyViolations = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory, configuration, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolations => write!(f, "Policy Violations (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license fulfillment.
#[derive(Debug, Error)]
pub enum FulfillError {
    #[error("Inventory not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory: {path}\nDetails: {details}\n\n💡 Hint: The inventory must be a JSON object mapping \"name@version\" to package metadata")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Invalid package identity: \"{identity}\"\nReason: {reason}\n\n💡 Hint: Identities have the form \"<name>@<version>\", e.g. \"left-pad@1.3.0\" or \"@scope/pkg@2.0.0\"")]
    InvalidIdentity { identity: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for request builders and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
