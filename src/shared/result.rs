use crate::shared::error::ResolutionError;

/// Type alias for Result with anyhow::Error as the error type.
/// This provides a consistent error handling pattern across the codebase.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a single resolver call against a remote service.
///
/// Resolver failures are never fatal; the pipeline turns an `Err` into an
/// absent value for that package.
pub type ResolutionResult<T> = std::result::Result<T, ResolutionError>;
