//! Error types for the payroll engine.
//!
//! The calculator itself never fails. These errors come from loading and
//! validating settings, resolving pay periods, and aggregating results.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
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

    /// A settings snapshot failed validation.
    #[error("Invalid payroll settings '{field}': {message}")]
    InvalidSettings {
        /// The settings field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No settings snapshot is effective on the requested date.
    #[error("No payroll settings effective on {date}")]
    SettingsNotFound {
        /// The date for which settings were requested.
        date: NaiveDate,
    },

    /// A pay period or P9 month was out of range or duplicated.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of the problem.
        message: String,
    },

    /// A request was structurally valid JSON but semantically incomplete.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
