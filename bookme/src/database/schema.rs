//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the booking system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
///
/// Emails carry a UNIQUE constraint so duplicate registrations are
/// rejected by the database itself, not only by the pre-insert check.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    )";

/// SQL statement to create the rooms table.
///
/// The `active` column is stored as an integer flag; inactive rooms stay
/// queryable but cannot take new reservations.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        location TEXT NOT NULL,
        active INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the reservations table.
///
/// Dates are stored as ISO-8601 TEXT (`YYYY-MM-DD`), which compares
/// correctly with SQLite's string ordering. The hour columns hold the
/// half-open interval `[start_hour, end_hour)`.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        date TEXT NOT NULL,
        start_hour INTEGER NOT NULL,
        end_hour INTEGER NOT NULL
    )";

/// SQL statement to create an index on (`room_id`, date).
///
/// This index speeds up the overlap check and availability queries, which
/// always filter by room and date together.
pub const CREATE_ROOM_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room_date ON reservations(room_id, date)";

/// SQL statement to create an index on the date column.
///
/// This index speeds up the future-reservation count used by the room
/// deletion guard.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (user_id, room_id, date, start_hour, end_hour)
    VALUES (?, ?, ?, ?, ?)
";

/// SQL statement to select the reservations of a room on a date.
pub const SELECT_RESERVATIONS_FOR_ROOM_DATE: &str = r"
    SELECT id, user_id, room_id, date, start_hour, end_hour
    FROM reservations
    WHERE room_id = ? AND date = ?
    ORDER BY start_hour
";
