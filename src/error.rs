//! Error types for the vacation day calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the vacation day calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Region code was not found in the calendar configuration.
    #[error("Region not found: {code}")]
    RegionNotFound {
        /// The region code that was not found.
        code: String,
    },

    /// A date range had its start date after its end date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The start date of the range.
        start: NaiveDate,
        /// The end date of the range.
        end: NaiveDate,
    },

    /// No entitlement account could be obtained for a required year.
    #[error("No account for '{login}' in {year}")]
    MissingAccount {
        /// The year for which the account was required.
        year: i32,
        /// The login name of the person the account belongs to.
        login: String,
    },

    /// An external query or lookup collaborator failed.
    #[error("Upstream lookup failed: {message}")]
    UpstreamLookup {
        /// A description of the lookup failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
