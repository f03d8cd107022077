//! Error types for the bookme library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the bookme library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a bookme error.
///
/// # Examples
///
/// ```
/// use bookme::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bookme library.
///
/// This enum encompasses all possible error conditions that can occur
/// during room, user, and reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A malformed or inverted hour range was provided.
    #[error("invalid hour range {start}-{end}: {reason}")]
    InvalidRange {
        /// The requested start hour.
        start: u8,
        /// The requested end hour.
        end: u8,
        /// The reason the range is invalid.
        reason: String,
    },

    /// A date string could not be parsed.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The unparseable date value.
        value: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The room exists but is not active and cannot be booked.
    #[error("room {room_id} is not active and cannot be reserved")]
    InactiveRoom {
        /// The id of the inactive room.
        room_id: i64,
    },

    /// A reservation conflict occurred.
    #[error("reservation conflict: {details}")]
    ReservationConflict {
        /// Details about the conflict.
        details: String,
    },

    /// A user with the given email already exists.
    #[error("a user with email '{email}' already exists")]
    DuplicateEmail {
        /// The conflicting email address.
        email: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::hours::InvalidHourRangeError> for Error {
    fn from(err: crate::hours::InvalidHourRangeError) -> Self {
        Self::InvalidRange {
            start: err.start,
            end: err.end,
            reason: err.reason,
        }
    }
}

impl From<crate::ValidationError> for Error {
    fn from(err: crate::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error indicates a missing resource.
    ///
    /// The boundary layer maps these to 404-class responses.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::Error;
    ///
    /// let err = Error::NotFound { resource: "room 7".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a caller-correctable domain failure.
    ///
    /// Covers invalid ranges and dates, inactive rooms, reservation
    /// conflicts, duplicate emails, and field validation failures. The
    /// boundary layer maps these to 400-class responses.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::Error;
    ///
    /// let err = Error::ReservationConflict { details: "room 1 is taken".into() };
    /// assert!(err.is_semantic());
    /// ```
    #[must_use]
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::InvalidDate { .. }
                | Self::InactiveRoom { .. }
                | Self::ReservationConflict { .. }
                | Self::DuplicateEmail { .. }
                | Self::Validation { .. }
        )
    }
}
