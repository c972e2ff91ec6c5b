//! Error types for the working-time reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Calculations themselves degrade to defaults instead of failing, so these
//! errors only surface while loading static tables or when a caller addresses
//! something that does not exist.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the engine.
///
/// # Example
///
/// ```
/// use workhours_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/agreement.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/agreement.yaml");
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

    /// User-entered date text could not be understood.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw text that was supplied.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A day operation addressed a date that the calendar does not contain.
    #[error("Date {date} is not part of the {year} calendar")]
    DateOutsideCalendar {
        /// The date that was requested.
        date: NaiveDate,
        /// The year the calendar was built for.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_displays_value_and_message() {
        let error = EngineError::InvalidDate {
            value: "2025-13-01".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2025-13-01': input is out of range"
        );
    }

    #[test]
    fn test_date_outside_calendar_displays_date_and_year() {
        let error = EngineError::DateOutsideCalendar {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            year: 2025,
        };
        assert_eq!(
            error.to_string(),
            "Date 2026-01-01 is not part of the 2025 calendar"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
