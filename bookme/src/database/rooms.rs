//! Room storage operations, including the deletion guard.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};

use crate::error::{Error, Result};
use crate::room::{Room, RoomDraft};

use super::connection::Database;

fn row_to_room(row: &Row<'_>) -> rusqlite::Result<Room> {
    let active: i64 = row.get(4)?;
    Ok(Room::new(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        active != 0,
    ))
}

impl Database {
    /// Creates a new room, active by default.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub fn create_room(&mut self, draft: &RoomDraft) -> Result<Room> {
        self.conn.execute(
            "INSERT INTO rooms (name, capacity, location, active) VALUES (?, ?, ?, 1)",
            params![draft.name(), draft.capacity(), draft.location()],
        )?;
        let id = self.conn.last_insert_rowid();

        Ok(Room::new(
            id,
            draft.name().to_string(),
            draft.capacity(),
            draft.location().to_string(),
            true,
        ))
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn find_room(&self, id: i64) -> Result<Option<Room>> {
        let room = self
            .conn
            .query_row(
                "SELECT id, name, capacity, location, active FROM rooms WHERE id = ?",
                params![id],
                row_to_room,
            )
            .optional()?;
        Ok(room)
    }

    /// Lists all rooms ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, capacity, location, active FROM rooms ORDER BY id")?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Replaces a room's fields, including its active flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no room with the id exists, or a
    /// database error if the update fails.
    pub fn update_room(&mut self, id: i64, draft: &RoomDraft, active: bool) -> Result<Room> {
        let updated = self.conn.execute(
            "UPDATE rooms SET name = ?, capacity = ?, location = ?, active = ? WHERE id = ?",
            params![draft.name(), draft.capacity(), draft.location(), active, id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound {
                resource: format!("room {id}"),
            });
        }

        Ok(Room::new(
            id,
            draft.name().to_string(),
            draft.capacity(),
            draft.location().to_string(),
            active,
        ))
    }

    /// Counts the room's reservations dated `today` or later.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn count_future_reservations(&self, room_id: i64, today: NaiveDate) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM reservations WHERE room_id = ? AND date >= ?",
            params![room_id, today.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Deletes a room and its past reservations.
    ///
    /// The existence check, the future-reservation guard, and the deletes
    /// run in a single immediate transaction, so a reservation created
    /// concurrently cannot slip past the guard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist, or
    /// [`Error::ReservationConflict`] if the room still has reservations
    /// dated `today` or later.
    pub fn delete_room(&mut self, id: i64, today: NaiveDate) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: Option<i64> = tx
            .query_row("SELECT id FROM rooms WHERE id = ?", params![id], |row| {
                row.get(0)
            })
            .optional()?;
        if exists.is_none() {
            return Err(Error::NotFound {
                resource: format!("room {id}"),
            });
        }

        let future: i64 = tx.query_row(
            "SELECT COUNT(*) FROM reservations WHERE room_id = ? AND date >= ?",
            params![id, today.to_string()],
            |row| row.get(0),
        )?;
        if future > 0 {
            return Err(Error::ReservationConflict {
                details: format!("room {id} has {future} upcoming reservation(s)"),
            });
        }

        tx.execute("DELETE FROM reservations WHERE room_id = ?", params![id])?;
        tx.execute("DELETE FROM rooms WHERE id = ?", params![id])?;
        tx.commit()?;

        Ok(())
    }
}
