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
    /// Success - every package was processed
    Success = 0,
    /// Vulnerabilities were found and `--fail-on-vulnerabilities` was given
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, invalid config, output I/O error)
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
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal application errors.
///
/// These abort the run. Per-package lookup failures are never reported
/// through this type; see [`ResolutionError`].
#[derive(Debug, Error)]
pub enum PackageFinderError {
    #[error("Input file not found: {path}\n\n💡 Hint: Pass the path of a file that lists one name@version identifier per line")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}

/// Coarse classification of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection failure or non-success HTTP status
    Transport,
    /// Body is not JSON or does not have the expected structure
    Decode,
    /// A record lacks the pointer needed for the next hop
    MissingLink,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Decode => write!(f, "decode"),
            FailureKind::MissingLink => write!(f, "missing link"),
        }
    }
}

/// Failure of a single lookup against the registry or the advisory service.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status code {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response from {url} has no '{field}' link to follow")]
    MissingLink { url: String, field: &'static str },

    #[error("Response from {url} has no '{field}' field")]
    MissingField { url: String, field: &'static str },

    #[error("Invalid URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },
}

impl ResolutionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolutionError::Transport { .. } | ResolutionError::HttpStatus { .. } => {
                FailureKind::Transport
            }
            ResolutionError::Decode { .. } | ResolutionError::MissingField { .. } => {
                FailureKind::Decode
            }
            ResolutionError::MissingLink { .. } | ResolutionError::InvalidUrl { .. } => {
                FailureKind::MissingLink
            }
        }
    }
}
