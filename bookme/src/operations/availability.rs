//! Cached availability queries.

use chrono::NaiveDate;

use crate::availability::Availability;
use crate::cache::AvailabilityCache;
use crate::database::Database;
use crate::error::{Error, Result};

/// Returns the free slots of a room on a date, using the cache.
///
/// A live cache entry is returned as-is without consulting the store.
/// On a miss the room is validated (it must exist and be active), the
/// free slots are computed from the day's reservations, and the result
/// is cached before returning.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the room does not exist or
/// [`Error::InactiveRoom`] if it is not active.
pub fn room_availability(
    db: &Database,
    cache: &AvailabilityCache,
    room_id: i64,
    date: NaiveDate,
) -> Result<Availability> {
    let key = AvailabilityCache::availability_key(room_id, date);
    if let Some(cached) = cache.get(&key) {
        return Ok(cached);
    }

    let room = db.find_room(room_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {room_id}"),
    })?;
    if !room.is_active() {
        return Err(Error::InactiveRoom { room_id });
    }

    let reservations = db.reservations_for_room_date(room_id, date)?;
    let availability = Availability::compute(room_id, date, &reservations);
    cache.set(key, availability.clone());

    Ok(availability)
}
