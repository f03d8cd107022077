//! High-level booking operations.
//!
//! The database layer stores records and guards against double booking;
//! this module layers the request validation on top: rule ordering for
//! reservation requests, lookups of the referenced user and room, and
//! cache maintenance around writes.
//!
//! # Examples
//!
//! ```no_run
//! use bookme::database::{Database, DatabaseConfig};
//! use bookme::operations::{create_reservation, room_availability, ReserveRequest};
//! use bookme::AvailabilityCache;
//! use chrono::NaiveDate;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/bookme.db")).unwrap();
//! let cache = AvailabilityCache::new();
//! let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
//!
//! let request = ReserveRequest::new(1, 1, date, 10, 12);
//! let reservation = create_reservation(&mut db, &cache, &request).unwrap();
//!
//! let availability = room_availability(&db, &cache, 1, date).unwrap();
//! assert!(!availability.free_slots().contains(&10));
//! # let _ = reservation;
//! ```

pub mod availability;
pub mod reserve;

pub use availability::room_availability;
pub use reserve::{create_reservation, reservation_by_id, reservations_by_room, ReserveRequest};
