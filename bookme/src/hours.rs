//! Hour-of-day types with validation.
//!
//! This module provides the [`Hour`] and [`HourRange`] types used to express
//! booking intervals. A range is half-open: `[start, end)` occupies the hours
//! `start` through `end - 1`, so back-to-back bookings (one range ending where
//! the next begins) never overlap.

use serde::{Deserialize, Serialize};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// An hour of the day, validated to the range 0-23.
///
/// # Examples
///
/// ```
/// use bookme::Hour;
///
/// let hour = Hour::try_from(10).unwrap();
/// assert_eq!(hour.value(), 10);
///
/// assert!(Hour::try_from(24).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Returns the underlying hour value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = InvalidHourError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 23 {
            Ok(Self(value))
        } else {
            Err(InvalidHourError {
                value,
                reason: "hours must be between 0 and 23".to_string(),
            })
        }
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for out-of-range hour values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHourError {
    /// The invalid hour value.
    pub value: u8,
    /// The reason the hour is invalid.
    pub reason: String,
}

impl std::fmt::Display for InvalidHourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hour {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidHourError {}

/// Raw wire form of an hour range, used for (de)serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHourRange {
    start_hour: u8,
    end_hour: u8,
}

/// A half-open hour interval `[start, end)` within a single day.
///
/// The invariant `start < end` always holds, so a range occupies at least
/// one hour. Serialized as `{"startHour": .., "endHour": ..}`.
///
/// # Examples
///
/// ```
/// use bookme::HourRange;
///
/// let morning = HourRange::from_hours(10, 12).unwrap();
/// let noon = HourRange::from_hours(12, 14).unwrap();
///
/// // Touching ranges do not overlap: half-open semantics
/// assert!(!morning.overlaps(&noon));
/// assert_eq!(morning.hours().collect::<Vec<_>>(), vec![10, 11]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHourRange", into = "RawHourRange")]
pub struct HourRange {
    start: Hour,
    end: Hour,
}

impl HourRange {
    /// Creates a new hour range from validated hours.
    ///
    /// # Errors
    ///
    /// Returns an error if `start >= end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::{Hour, HourRange};
    ///
    /// let start = Hour::try_from(9).unwrap();
    /// let end = Hour::try_from(11).unwrap();
    /// let range = HourRange::new(start, end).unwrap();
    /// assert_eq!(range.len(), 2);
    ///
    /// // Inverted and empty ranges are rejected
    /// assert!(HourRange::new(end, start).is_err());
    /// assert!(HourRange::new(start, start).is_err());
    /// ```
    pub fn new(start: Hour, end: Hour) -> Result<Self, InvalidHourRangeError> {
        if start >= end {
            return Err(InvalidHourRangeError {
                start: start.value(),
                end: end.value(),
                reason: "start hour must be strictly before end hour".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a new hour range from raw hour values.
    ///
    /// Validation order matters for deterministic error reporting: the
    /// ordering rule (`start < end`) is checked before the bounds rule
    /// (both hours within 0-23).
    ///
    /// # Errors
    ///
    /// Returns an error if `start >= end` or either hour exceeds 23.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::HourRange;
    ///
    /// assert!(HourRange::from_hours(10, 12).is_ok());
    /// assert!(HourRange::from_hours(14, 14).is_err());
    /// assert!(HourRange::from_hours(10, 25).is_err());
    /// ```
    pub fn from_hours(start: u8, end: u8) -> Result<Self, InvalidHourRangeError> {
        if start >= end {
            return Err(InvalidHourRangeError {
                start,
                end,
                reason: "start hour must be strictly before end hour".to_string(),
            });
        }
        let bounds_error = |e: InvalidHourError| InvalidHourRangeError {
            start,
            end,
            reason: e.reason,
        };
        let start = Hour::try_from(start).map_err(bounds_error)?;
        let end = Hour::try_from(end).map_err(bounds_error)?;
        Self::new(start, end)
    }

    /// Returns the start hour (inclusive).
    #[must_use]
    pub const fn start(&self) -> Hour {
        self.start
    }

    /// Returns the end hour (exclusive).
    #[must_use]
    pub const fn end(&self) -> Hour {
        self.end
    }

    /// Returns the number of hours covered by this range.
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.end.value() - self.start.value()
    }

    /// Returns false: a valid range always covers at least one hour.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Checks whether two half-open ranges intersect.
    ///
    /// Ranges `[a, b)` and `[c, d)` intersect iff `a < d && c < b`.
    /// Touching ranges (`b == c`) do not intersect, which is what allows
    /// back-to-back bookings.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::HourRange;
    ///
    /// let a = HourRange::from_hours(10, 12).unwrap();
    /// let b = HourRange::from_hours(11, 13).unwrap();
    /// let c = HourRange::from_hours(12, 14).unwrap();
    ///
    /// assert!(a.overlaps(&b));
    /// assert!(b.overlaps(&a));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }

    /// Checks whether the given hour falls inside this range.
    #[must_use]
    pub const fn contains(&self, hour: u8) -> bool {
        self.start.value() <= hour && hour < self.end.value()
    }

    /// Iterates over the individual hours covered by this range.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookme::HourRange;
    ///
    /// let range = HourRange::from_hours(8, 11).unwrap();
    /// assert_eq!(range.hours().collect::<Vec<_>>(), vec![8, 9, 10]);
    /// ```
    pub fn hours(&self) -> impl Iterator<Item = u8> {
        self.start.value()..self.end.value()
    }
}

impl TryFrom<RawHourRange> for HourRange {
    type Error = InvalidHourRangeError;

    fn try_from(raw: RawHourRange) -> Result<Self, Self::Error> {
        Self::from_hours(raw.start_hour, raw.end_hour)
    }
}

impl From<HourRange> for RawHourRange {
    fn from(range: HourRange) -> Self {
        Self {
            start_hour: range.start.value(),
            end_hour: range.end.value(),
        }
    }
}

impl std::fmt::Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Error type for malformed or inverted hour ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHourRangeError {
    /// The requested start hour.
    pub start: u8,
    /// The requested end hour.
    pub end: u8,
    /// The reason the range is invalid.
    pub reason: String,
}

impl std::fmt::Display for InvalidHourRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid hour range {}-{}: {}",
            self.start, self.end, self.reason
        )
    }
}

impl std::error::Error for InvalidHourRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_valid() {
        for value in 0..=23 {
            let hour = Hour::try_from(value).unwrap();
            assert_eq!(hour.value(), value);
        }
    }

    #[test]
    fn test_hour_out_of_range() {
        let err = Hour::try_from(24).unwrap_err();
        assert_eq!(err.value, 24);
        assert!(err.reason.contains("between 0 and 23"));
        assert!(Hour::try_from(255).is_err());
    }

    #[test]
    fn test_range_valid() {
        let range = HourRange::from_hours(10, 12).unwrap();
        assert_eq!(range.start().value(), 10);
        assert_eq!(range.end().value(), 12);
        assert_eq!(range.len(), 2);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_zero_length_rejected() {
        let err = HourRange::from_hours(14, 14).unwrap_err();
        assert!(err.reason.contains("strictly before"));
    }

    #[test]
    fn test_range_inverted_rejected() {
        let err = HourRange::from_hours(12, 10).unwrap_err();
        assert!(err.reason.contains("strictly before"));
    }

    #[test]
    fn test_range_order_checked_before_bounds() {
        // Both rules are violated; the ordering rule must win.
        let err = HourRange::from_hours(30, 25).unwrap_err();
        assert!(err.reason.contains("strictly before"));
    }

    #[test]
    fn test_range_bounds_rejected() {
        let err = HourRange::from_hours(10, 25).unwrap_err();
        assert!(err.reason.contains("between 0 and 23"));
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = HourRange::from_hours(10, 12).unwrap();
        let b = HourRange::from_hours(11, 13).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        let a = HourRange::from_hours(10, 12).unwrap();
        let b = HourRange::from_hours(12, 14).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = HourRange::from_hours(8, 18).unwrap();
        let inner = HourRange::from_hours(10, 12).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = HourRange::from_hours(9, 11).unwrap();
        let b = HourRange::from_hours(9, 11).unwrap();
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        let a = HourRange::from_hours(8, 10).unwrap();
        let b = HourRange::from_hours(14, 16).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contains() {
        let range = HourRange::from_hours(10, 12).unwrap();
        assert!(range.contains(10));
        assert!(range.contains(11));
        assert!(!range.contains(12));
        assert!(!range.contains(9));
    }

    #[test]
    fn test_hours_iterator() {
        let range = HourRange::from_hours(8, 12).unwrap();
        assert_eq!(range.hours().collect::<Vec<_>>(), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_display() {
        let range = HourRange::from_hours(10, 12).unwrap();
        assert_eq!(format!("{range}"), "10-12");
    }

    #[test]
    fn test_range_serde() {
        let range = HourRange::from_hours(10, 12).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"startHour":10,"endHour":12}"#);

        let parsed: HourRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }

    #[test]
    fn test_range_serde_rejects_invalid() {
        let result: std::result::Result<HourRange, _> =
            serde_json::from_str(r#"{"startHour":14,"endHour":14}"#);
        assert!(result.is_err());
    }
}
