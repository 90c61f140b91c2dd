//! Error types for movequote.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::UserType;

/// Result type alias for movequote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors that can occur while building or pricing a move.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Home size is not one of the known categories.
    #[error(
        "Invalid home size '{0}', expected one of: bedsitter, one bedroom, studio, two bedroom"
    )]
    InvalidCategory(String),

    /// Latitude or longitude outside the valid range.
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),

    /// Input text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Tariff contains a value that cannot produce a valid price.
    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),

    /// Moving request form failed validation.
    #[error(transparent)]
    MovingDetails(#[from] MovingDetailsError),

    /// The session user is not allowed to perform the operation.
    #[error("Access denied. Only customers can post moving details (user type: {user_type})")]
    AccessDenied {
        /// The user type of the rejected session.
        user_type: UserType,
    },

    /// The session has expired or was logged out.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for coordinates outside the valid geographic range.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Latitude is not within [-90, 90].
    #[error("Invalid latitude {0}: must be between -90 and 90")]
    Latitude(f64),

    /// Longitude is not within [-180, 180].
    #[error("Invalid longitude {0}: must be between -180 and 180")]
    Longitude(f64),
}

/// Error for a moving request form that cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovingDetailsError {
    /// A required text field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Moving date lies before the current time.
    #[error("Moving date cannot be in the past: {0}")]
    DateInPast(NaiveDateTime),

    /// Moving date is less than the minimum notice ahead.
    #[error("Moving date should be at least {min_days} days from today: {date}")]
    DateTooSoon {
        /// The requested moving date.
        date: NaiveDateTime,
        /// Minimum number of days of notice.
        min_days: i64,
    },
}
