//! Database layer for persistent storage of rooms, users, and reservations.
//!
//! This module provides a SQLite-based storage layer, including connection
//! management, schema versioning, and CRUD operations for the three record
//! types.
//!
//! # Examples
//!
//! ```no_run
//! use bookme::database::{Database, DatabaseConfig};
//! use bookme::{RoomDraft, UserDraft};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/bookme.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Create a room and a user
//! let room = db.create_room(&RoomDraft::new("Boardroom", 12, "HQ").unwrap()).unwrap();
//! let user = db.create_user(&UserDraft::new("Ada", "ada@example.com").unwrap()).unwrap();
//! println!("room {} user {}", room.id(), user.id());
//! ```

mod config;
mod connection;
pub mod migrations;
mod reservations;
mod rooms;
mod schema;
mod users;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
