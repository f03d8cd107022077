//! Reservation storage operations.
//!
//! The conflict check and the insert run inside one immediate transaction,
//! so two clients racing for the same room and hours cannot both succeed:
//! the second writer re-reads the day's bookings after the first commit and
//! sees the conflict.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use crate::error::{Error, Result};
use crate::hours::HourRange;
use crate::reservation::{overlaps_existing, Reservation};

use super::connection::Database;
use super::schema::{INSERT_RESERVATION, SELECT_RESERVATIONS_FOR_ROOM_DATE};

fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let date_text: String = row.get(3)?;
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    let start: u8 = row.get(4)?;
    let end: u8 = row.get(5)?;
    let hours = HourRange::from_hours(start, end)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e)))?;

    Ok(Reservation::new(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        date,
        hours,
    ))
}

fn query_room_date(
    conn: &Connection,
    room_id: i64,
    date: NaiveDate,
) -> rusqlite::Result<Vec<Reservation>> {
    let mut stmt = conn.prepare(SELECT_RESERVATIONS_FOR_ROOM_DATE)?;
    let reservations = stmt
        .query_map(params![room_id, date.to_string()], row_to_reservation)?
        .collect();
    reservations
}

impl Database {
    /// Books a room for the given user, date, and hours.
    ///
    /// The caller is expected to have validated the user and room first;
    /// this method only guards against double booking. The check and the
    /// insert share one immediate transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationConflict`] if the interval intersects an
    /// existing booking of the room on that date, or a database error if
    /// the transaction fails.
    pub fn create_reservation(
        &mut self,
        user_id: i64,
        room_id: i64,
        date: NaiveDate,
        hours: &HourRange,
    ) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = query_room_date(&tx, room_id, date)?;
        if overlaps_existing(&existing, hours) {
            return Err(Error::ReservationConflict {
                details: format!("room {room_id} is not available from {hours} on {date}"),
            });
        }

        tx.execute(
            INSERT_RESERVATION,
            params![
                user_id,
                room_id,
                date.to_string(),
                hours.start().value(),
                hours.end().value()
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Reservation::new(id, user_id, room_id, date, *hours))
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn find_reservation(&self, id: i64) -> Result<Option<Reservation>> {
        let reservation = self
            .conn
            .query_row(
                "SELECT id, user_id, room_id, date, start_hour, end_hour
                 FROM reservations WHERE id = ?",
                params![id],
                row_to_reservation,
            )
            .optional()?;
        Ok(reservation)
    }

    /// Lists every reservation of a room, ordered by date then start hour.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn reservations_for_room(&self, room_id: i64) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, room_id, date, start_hour, end_hour
             FROM reservations WHERE room_id = ?
             ORDER BY date, start_hour",
        )?;
        let reservations = stmt
            .query_map(params![room_id], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Lists a room's reservations on one date, ordered by start hour.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn reservations_for_room_date(
        &self,
        room_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        Ok(query_room_date(&self.conn, room_id, date)?)
    }
}
