//! Availability computation over the daily booking window.
//!
//! Rooms are bookable between [`OPEN_HOUR`] (inclusive) and [`CLOSE_HOUR`]
//! (exclusive). A free slot is a one-hour interval `[h, h+1)` inside that
//! window that no reservation covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reservation::Reservation;

/// First bookable hour of the day (inclusive).
pub const OPEN_HOUR: u8 = 8;

/// First hour past the booking window (exclusive).
pub const CLOSE_HOUR: u8 = 20;

/// The free one-hour slots of a room on a single date.
///
/// Serialized as `{"roomId": .., "date": "YYYY-MM-DD", "freeSlots": [..]}`.
///
/// # Examples
///
/// ```
/// use bookme::Availability;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// let availability = Availability::compute(3, date, &[]);
/// assert_eq!(availability.free_slots().len(), 12);
/// assert_eq!(availability.free_slots()[0], 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    room_id: i64,
    date: NaiveDate,
    free_slots: Vec<u8>,
}

impl Availability {
    /// Computes the free slots of a room from its reservations on a date.
    ///
    /// Walks the window hour by hour and keeps every hour not covered by
    /// a reservation. The result is in ascending order and empty for a
    /// fully booked day. Reservations for other rooms or dates must be
    /// filtered out by the caller; intervals reaching outside the window
    /// simply have their out-of-window hours ignored.
    #[must_use]
    pub fn compute(room_id: i64, date: NaiveDate, reservations: &[Reservation]) -> Self {
        let free_slots = (OPEN_HOUR..CLOSE_HOUR)
            .filter(|&h| !reservations.iter().any(|r| r.hours().contains(h)))
            .collect();

        Self {
            room_id,
            date,
            free_slots,
        }
    }

    /// Returns the room id the availability was computed for.
    #[must_use]
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// Returns the date the availability was computed for.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the free hour slots in ascending order.
    #[must_use]
    pub fn free_slots(&self) -> &[u8] {
        &self.free_slots
    }

    /// Checks whether the day has no free slots left.
    #[must_use]
    pub fn is_fully_booked(&self) -> bool {
        self.free_slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hours::HourRange;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    fn reservation(start: u8, end: u8) -> Reservation {
        Reservation::new(1, 1, 3, date(), HourRange::from_hours(start, end).unwrap())
    }

    #[test]
    fn test_empty_day_has_full_window() {
        let availability = Availability::compute(3, date(), &[]);
        let expected: Vec<u8> = (8..20).collect();
        assert_eq!(availability.free_slots(), expected.as_slice());
        assert!(!availability.is_fully_booked());
    }

    #[test]
    fn test_booked_hours_are_excluded() {
        let reservations = vec![reservation(10, 12)];
        let availability = Availability::compute(3, date(), &reservations);
        assert!(!availability.free_slots().contains(&10));
        assert!(!availability.free_slots().contains(&11));
        assert!(availability.free_slots().contains(&9));
        assert!(availability.free_slots().contains(&12));
    }

    #[test]
    fn test_multiple_reservations() {
        let reservations = vec![reservation(8, 10), reservation(14, 16), reservation(18, 20)];
        let availability = Availability::compute(3, date(), &reservations);
        assert_eq!(
            availability.free_slots(),
            &[10, 11, 12, 13, 16, 17][..]
        );
    }

    #[test]
    fn test_fully_booked_day() {
        let reservations = vec![reservation(8, 20)];
        let availability = Availability::compute(3, date(), &reservations);
        assert!(availability.is_fully_booked());
        assert!(availability.free_slots().is_empty());
    }

    #[test]
    fn test_reservation_outside_window_ignored() {
        // Hours before the window never appear as slots either way.
        let reservations = vec![reservation(6, 9)];
        let availability = Availability::compute(3, date(), &reservations);
        assert!(!availability.free_slots().contains(&8));
        assert!(availability.free_slots().contains(&9));
    }

    #[test]
    fn test_slots_are_ascending() {
        let reservations = vec![reservation(12, 14)];
        let availability = Availability::compute(3, date(), &reservations);
        let slots = availability.free_slots();
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_availability_serde() {
        let availability = Availability::compute(3, date(), &[reservation(8, 19)]);
        let json = serde_json::to_value(&availability).unwrap();
        assert_eq!(json["roomId"], 3);
        assert_eq!(json["date"], "2025-12-15");
        assert_eq!(json["freeSlots"], serde_json::json!([19]));
    }
}
