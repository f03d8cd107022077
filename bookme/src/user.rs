//! User records and validation for new users.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A registered user who can hold reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: i64,
    name: String,
    email: String,
}

impl User {
    /// Creates a user record with a store-assigned id.
    #[must_use]
    pub const fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// Returns the store-assigned user id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A validated draft for registering a user.
///
/// The email check is deliberately shallow: the address must contain an
/// `@` and the domain part must contain a `.`. Anything stricter belongs
/// to a mail-delivery layer, not a booking store.
///
/// # Examples
///
/// ```
/// use bookme::UserDraft;
///
/// assert!(UserDraft::new("Ada", "ada@example.com").is_ok());
/// assert!(UserDraft::new("Ada", "ada@localhost").is_err());
/// assert!(UserDraft::new("Ada", "not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Validates the fields for a new user.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the name is empty after trimming
    /// or the email fails the shallow format check.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".to_string(),
                message: "user name must be non-empty".to_string(),
            });
        }

        let email = email.into().trim().to_string();
        if !is_plausible_email(&email) {
            return Err(ValidationError {
                field: "email".to_string(),
                message: format!("'{email}' is not a valid email address"),
            });
        }

        Ok(Self { name, email })
    }

    /// Returns the validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the validated email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
