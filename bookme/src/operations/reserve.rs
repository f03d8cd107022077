//! Reservation request validation and booking.

use chrono::NaiveDate;

use crate::cache::AvailabilityCache;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::hours::HourRange;
use crate::reservation::Reservation;

/// A request to book a room.
///
/// Hours are raw values so that malformed input reaches the validation
/// pipeline instead of being rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveRequest {
    /// Id of the user making the booking.
    pub user_id: i64,
    /// Id of the room to book.
    pub room_id: i64,
    /// Calendar date of the booking.
    pub date: NaiveDate,
    /// Requested start hour (inclusive).
    pub start_hour: u8,
    /// Requested end hour (exclusive).
    pub end_hour: u8,
}

impl ReserveRequest {
    /// Creates a reserve request.
    #[must_use]
    pub const fn new(user_id: i64, room_id: i64, date: NaiveDate, start_hour: u8, end_hour: u8) -> Self {
        Self {
            user_id,
            room_id,
            date,
            start_hour,
            end_hour,
        }
    }
}

/// Validates a reserve request and books the room.
///
/// The rules run in a fixed order and the first failure wins:
/// 1. The hour range must be well-formed (`start < end`, both within 0-23).
/// 2. The user must exist.
/// 3. The room must exist.
/// 4. The room must be active.
/// 5. The interval must not intersect an existing booking; this check and
///    the insert share one database transaction.
///
/// On success the cached availability for the room and date is dropped so
/// the next query recomputes it.
///
/// # Errors
///
/// Returns the error matching the first failed rule: [`Error::InvalidRange`],
/// [`Error::NotFound`], [`Error::InactiveRoom`], or
/// [`Error::ReservationConflict`].
pub fn create_reservation(
    db: &mut Database,
    cache: &AvailabilityCache,
    request: &ReserveRequest,
) -> Result<Reservation> {
    let hours = HourRange::from_hours(request.start_hour, request.end_hour)?;

    db.find_user(request.user_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("user {}", request.user_id),
    })?;

    let room = db.find_room(request.room_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {}", request.room_id),
    })?;
    if !room.is_active() {
        return Err(Error::InactiveRoom {
            room_id: request.room_id,
        });
    }

    let reservation = db.create_reservation(request.user_id, request.room_id, request.date, &hours)?;

    cache.delete(&AvailabilityCache::availability_key(
        request.room_id,
        request.date,
    ));

    Ok(reservation)
}

/// Fetches a reservation by id.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no reservation with the id exists.
pub fn reservation_by_id(db: &Database, id: i64) -> Result<Reservation> {
    db.find_reservation(id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })
}

/// Lists every reservation of a room.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the room does not exist. An existing
/// room with no bookings yields an empty list.
pub fn reservations_by_room(db: &Database, room_id: i64) -> Result<Vec<Reservation>> {
    db.find_room(room_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {room_id}"),
    })?;
    db.reservations_for_room(room_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConfig;
    use crate::room::RoomDraft;
    use crate::user::UserDraft;
    use tempfile::tempdir;

    fn open_test_db(dir: &tempfile::TempDir) -> Database {
        Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap()
    }

    fn seed(db: &mut Database) -> (i64, i64) {
        let user = db
            .create_user(&UserDraft::new("Ada", "ada@example.com").unwrap())
            .unwrap();
        let room = db
            .create_room(&RoomDraft::new("Boardroom", 12, "HQ").unwrap())
            .unwrap();
        (user.id(), room.id())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
    }

    #[test]
    fn test_successful_booking() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);

        let request = ReserveRequest::new(user_id, room_id, date(), 10, 12);
        let reservation = create_reservation(&mut db, &cache, &request).unwrap();
        assert_eq!(reservation.user_id(), user_id);
        assert_eq!(reservation.hours().start().value(), 10);
    }

    #[test]
    fn test_invalid_range_checked_first() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();

        // User and room do not exist, but the range rule fires first
        let request = ReserveRequest::new(999, 999, date(), 14, 14);
        let err = create_reservation(&mut db, &cache, &request).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn test_missing_user_before_missing_room() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();

        let request = ReserveRequest::new(999, 998, date(), 10, 12);
        let err = create_reservation(&mut db, &cache, &request).unwrap_err();
        assert_eq!(err.to_string(), "not found: user 999");
    }

    #[test]
    fn test_missing_room() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, _) = seed(&mut db);

        let request = ReserveRequest::new(user_id, 999, date(), 10, 12);
        let err = create_reservation(&mut db, &cache, &request).unwrap_err();
        assert_eq!(err.to_string(), "not found: room 999");
    }

    #[test]
    fn test_inactive_room_rejected() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);
        db.update_room(room_id, &RoomDraft::new("Boardroom", 12, "HQ").unwrap(), false)
            .unwrap();

        let request = ReserveRequest::new(user_id, room_id, date(), 10, 12);
        let err = create_reservation(&mut db, &cache, &request).unwrap_err();
        assert!(matches!(err, Error::InactiveRoom { room_id: r } if r == room_id));
    }

    #[test]
    fn test_conflict_rejected() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);

        create_reservation(
            &mut db,
            &cache,
            &ReserveRequest::new(user_id, room_id, date(), 10, 12),
        )
        .unwrap();
        let err = create_reservation(
            &mut db,
            &cache,
            &ReserveRequest::new(user_id, room_id, date(), 11, 13),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ReservationConflict { .. }));
    }

    #[test]
    fn test_booking_invalidates_cached_availability() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);
        let key = AvailabilityCache::availability_key(room_id, date());

        cache.set(key.clone(), crate::Availability::compute(room_id, date(), &[]));
        assert!(cache.get(&key).is_some());

        create_reservation(
            &mut db,
            &cache,
            &ReserveRequest::new(user_id, room_id, date(), 10, 12),
        )
        .unwrap();
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_failed_booking_keeps_cache() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);
        let key = AvailabilityCache::availability_key(room_id, date());

        cache.set(key.clone(), crate::Availability::compute(room_id, date(), &[]));
        let _ = create_reservation(
            &mut db,
            &cache,
            &ReserveRequest::new(user_id, room_id, date(), 14, 14),
        );
        assert!(cache.get(&key).is_some());
    }

    #[test]
    fn test_reservation_by_id() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);

        let created = create_reservation(
            &mut db,
            &cache,
            &ReserveRequest::new(user_id, room_id, date(), 10, 12),
        )
        .unwrap();

        let fetched = reservation_by_id(&db, created.id()).unwrap();
        assert_eq!(fetched, created);

        let err = reservation_by_id(&db, 999).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reservations_by_room() {
        let dir = tempdir().unwrap();
        let mut db = open_test_db(&dir);
        let cache = AvailabilityCache::new();
        let (user_id, room_id) = seed(&mut db);

        // Missing room errors even though the list would just be empty
        let err = reservations_by_room(&db, 999).unwrap_err();
        assert!(err.is_not_found());

        assert!(reservations_by_room(&db, room_id).unwrap().is_empty());

        create_reservation(
            &mut db,
            &cache,
            &ReserveRequest::new(user_id, room_id, date(), 10, 12),
        )
        .unwrap();
        assert_eq!(reservations_by_room(&db, room_id).unwrap().len(), 1);
    }
}
