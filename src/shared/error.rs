use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the package list was normalized
    Success = 0,
    /// The input itself was rejected (bad package identifiers, unknown ecosystem)
    InvalidInput = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, serialization error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the CLI should terminate with.
    ///
    /// Client-input errors anywhere in the chain win over generic failures.
    pub fn from_error(error: &anyhow::Error) -> Self {
        let client_error = error
            .chain()
            .filter_map(|cause| cause.downcast_ref::<NormalizerError>())
            .any(NormalizerError::is_client_error);

        if client_error {
            ExitCode::InvalidInput
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidInput => write!(f, "Invalid Input (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for package normalization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// A Go package or dependency name is not of the form `name@module`
    #[error("Invalid package identifier: {name}\nReason: {reason}\n\n💡 Hint: Go packages must be reported as \"<package>@<module>\"")]
    InvalidIdentifier { name: String, reason: String },

    #[error("Package list not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package list: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a list of {{name, version, dependencies}} records")]
    InputParseError { path: PathBuf, details: String },

    #[error("Unsupported package list format: {path}\n\n💡 Hint: Use a .json, .yml, .yaml or .toml file")]
    UnsupportedInputFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for request assembly
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl NormalizerError {
    /// Whether the error is caused by the caller's input rather than by the tool.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NormalizerError::InvalidIdentifier { .. }
                | NormalizerError::InputParseError { .. }
                | NormalizerError::UnsupportedInputFormat { .. }
                | NormalizerError::Validation { .. }
        )
    }
}
