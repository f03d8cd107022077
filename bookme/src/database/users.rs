//! User storage operations.

use rusqlite::{params, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::user::{User, UserDraft};

use super::connection::Database;

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User::new(row.get(0)?, row.get(1)?, row.get(2)?))
}

impl Database {
    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEmail`] if a user with the same email
    /// already exists, or a database error if the insert fails.
    pub fn create_user(&mut self, draft: &UserDraft) -> Result<User> {
        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM users WHERE email = ?",
                params![draft.email()],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(Error::DuplicateEmail {
                email: draft.email().to_string(),
            });
        }

        self.conn.execute(
            "INSERT INTO users (name, email) VALUES (?, ?)",
            params![draft.name(), draft.email()],
        )?;
        let id = self.conn.last_insert_rowid();

        Ok(User::new(
            id,
            draft.name().to_string(),
            draft.email().to_string(),
        ))
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn find_user(&self, id: i64) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, name, email FROM users WHERE id = ?",
                params![id],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    /// Lists all users ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email FROM users ORDER BY id")?;
        let users = stmt
            .query_map([], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }
}
