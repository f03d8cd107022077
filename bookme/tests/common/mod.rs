//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the bookme library.

use chrono::NaiveDate;
use tempfile::TempDir;

use bookme::database::{Database, DatabaseConfig};
use bookme::{HourRange, Reservation, Room, RoomDraft, User, UserDraft};

/// A database in a temporary directory.
///
/// The directory (and the database with it) is removed when the fixture
/// is dropped.
pub struct TestStore {
    pub db: Database,
    // Held only so the directory outlives the connection
    _dir: TempDir,
}

impl TestStore {
    /// Opens a fresh database in a temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory or database cannot be created. This is
    /// acceptable in test code where we want to fail fast on broken fixtures.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let db = Database::open(DatabaseConfig::new(dir.path().join("test.db")))
            .expect("should open test database");
        Self { db, _dir: dir }
    }

    /// Registers a user with a unique email derived from the name.
    pub fn seed_user(&mut self, name: &str) -> User {
        let email = format!("{}@example.com", name.to_lowercase());
        self.db
            .create_user(&UserDraft::new(name, email).expect("fixture user should be valid"))
            .expect("should create fixture user")
    }

    /// Creates an active room with a default capacity and location.
    pub fn seed_room(&mut self, name: &str) -> Room {
        self.db
            .create_room(&RoomDraft::new(name, 8, "HQ").expect("fixture room should be valid"))
            .expect("should create fixture room")
    }

    /// Books a room directly through the store, bypassing request validation.
    pub fn seed_reservation(
        &mut self,
        user_id: i64,
        room_id: i64,
        date: NaiveDate,
        start: u8,
        end: u8,
    ) -> Reservation {
        let hours = HourRange::from_hours(start, end).expect("fixture hours should be valid");
        self.db
            .create_reservation(user_id, room_id, date, &hours)
            .expect("should create fixture reservation")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for building a `NaiveDate` in tests.
///
/// # Panics
///
/// Panics on an invalid calendar date.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test date should be valid")
}
