#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bookme
//!
//! A library for managing meeting-room reservations.
//!
//! This library provides core types and functionality for registering users
//! and rooms, booking hour-granular reservations with overlap detection,
//! and querying cached room availability.
//!
//! ## Core Types
//!
//! - [`Hour`] and [`HourRange`]: Hour-of-day types with half-open intervals
//! - [`Reservation`], [`Room`], and [`User`]: The booking records
//! - [`Availability`] and [`AvailabilityCache`]: Free-slot computation and caching
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bookme::HourRange;
//!
//! let morning = HourRange::from_hours(9, 12).unwrap();
//! let afternoon = HourRange::from_hours(12, 14).unwrap();
//!
//! // Back-to-back bookings never conflict
//! assert!(!morning.overlaps(&afternoon));
//! assert_eq!(morning.len(), 3);
//! ```

pub mod availability;
pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod hours;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod room;
pub mod user;

// Re-export key types at crate root for convenience
pub use availability::{Availability, CLOSE_HOUR, OPEN_HOUR};
pub use cache::{cache_key, AvailabilityCache, DEFAULT_TTL};
pub use config::Config;
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use hours::{Hour, HourRange, InvalidHourError, InvalidHourRangeError};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    create_reservation, reservation_by_id, reservations_by_room, room_availability, ReserveRequest,
};
pub use reservation::{overlaps_existing, Reservation, ValidationError};
pub use room::{Room, RoomDraft};
pub use user::{User, UserDraft};
