//! Reservation types for tracking room bookings.
//!
//! A reservation books one half-open hour interval of a room for a user on a
//! calendar date. Reservations are immutable once created; there is no update
//! or cancel operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::hours::HourRange;

/// A persisted room reservation.
///
/// The id is assigned by the store on creation. Serialized with camelCase
/// field names and flattened hours, matching the wire schema:
/// `{"id": .., "userId": .., "roomId": .., "date": "YYYY-MM-DD",
/// "startHour": .., "endHour": ..}`.
///
/// # Examples
///
/// ```
/// use bookme::{HourRange, Reservation};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// let hours = HourRange::from_hours(10, 12).unwrap();
/// let reservation = Reservation::new(1, 7, 3, date, hours);
///
/// assert_eq!(reservation.room_id(), 3);
/// assert_eq!(reservation.hours().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: i64,
    user_id: i64,
    room_id: i64,
    date: NaiveDate,
    #[serde(flatten)]
    hours: HourRange,
}

impl Reservation {
    /// Creates a reservation record.
    ///
    /// This constructor is for assembling records that already carry a
    /// store-assigned id (rows read back from the database, fixtures in
    /// tests). New bookings go through the reservation operations, which
    /// validate and persist before an id exists.
    #[must_use]
    pub const fn new(id: i64, user_id: i64, room_id: i64, date: NaiveDate, hours: HourRange) -> Self {
        Self {
            id,
            user_id,
            room_id,
            date,
            hours,
        }
    }

    /// Returns the store-assigned reservation id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the id of the user who holds the booking.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Returns the id of the booked room.
    #[must_use]
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// Returns the calendar date of the booking.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the booked hour interval.
    #[must_use]
    pub const fn hours(&self) -> HourRange {
        self.hours
    }

    /// Checks whether this reservation is today or later.
    ///
    /// Future reservations block room deletion.
    #[must_use]
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

/// Checks a candidate interval against a set of existing reservations.
///
/// Returns true iff any existing reservation's interval intersects the
/// candidate under half-open semantics. The caller is responsible for
/// passing only reservations for the relevant room and date; this function
/// compares intervals alone and has no side effects.
///
/// # Examples
///
/// ```
/// use bookme::{overlaps_existing, HourRange, Reservation};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// let booked = vec![Reservation::new(
///     1, 7, 3, date,
///     HourRange::from_hours(10, 12).unwrap(),
/// )];
///
/// assert!(overlaps_existing(&booked, &HourRange::from_hours(11, 13).unwrap()));
/// assert!(!overlaps_existing(&booked, &HourRange::from_hours(12, 14).unwrap()));
/// ```
#[must_use]
pub fn overlaps_existing(existing: &[Reservation], candidate: &HourRange) -> bool {
    existing.iter().any(|r| r.hours.overlaps(candidate))
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
