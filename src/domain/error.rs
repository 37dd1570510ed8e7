//! Error types for JobFlow.
//!
//! This module defines the centralized error type [`JobflowError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Two failure modes are intentionally *not* errors: a job whose `qualifications`
//! field holds malformed JSON is recovered locally (the consumer substitutes an
//! empty list), and a filter combination matching zero jobs is a normal terminal
//! state of the query engine.

use thiserror::Error;

/// The main error type for JobFlow operations.
///
/// Fetch failures are retryable from the caller's point of view: the gateway
/// never retries on its own, it reports which logical operation failed and the
/// caller re-invokes the fetch.
///
/// # Examples
///
/// ```
/// use jobflow::domain::JobflowError;
///
/// fn validate_config() -> Result<(), JobflowError> {
///     Err(JobflowError::Config("page_size must be positive".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum JobflowError {
    /// An upstream request failed with a non-success status or at the
    /// transport level.
    ///
    /// Carries the name of the logical gateway operation (`all_jobs`,
    /// `paginated_jobs`, `random_job`, `random_jobs`) so the caller can report
    /// which fetch to retry.
    #[error("failed to fetch {operation}: {reason}")]
    Fetch {
        /// Logical operation name.
        operation: &'static str,
        /// Status line or transport error description.
        reason: String,
    },

    /// An upstream response body could not be parsed as the expected shape.
    ///
    /// Only structural JSON parsing is validated; field-level oddities in the
    /// payload pass through and are tolerated downstream.
    #[error("failed to decode {operation} response: {reason}")]
    Decode {
        /// Logical operation name.
        operation: &'static str,
        /// Parser error description.
        reason: String,
    },

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are malformed, for example a
    /// non-numeric page size or an unknown sort key. The string describes the
    /// specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (export file writes).
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for JobFlow operations.
///
/// This is a type alias for `std::result::Result<T, JobflowError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, JobflowError>;
