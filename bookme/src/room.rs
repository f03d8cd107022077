//! Room records and validation for new or updated rooms.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A bookable meeting room.
///
/// Inactive rooms remain visible through lookups but reject new
/// reservations and availability queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    id: i64,
    name: String,
    capacity: u32,
    location: String,
    active: bool,
}

impl Room {
    /// Creates a room record with a store-assigned id.
    #[must_use]
    pub const fn new(id: i64, name: String, capacity: u32, location: String, active: bool) -> Self {
        Self {
            id,
            name,
            capacity,
            location,
            active,
        }
    }

    /// Returns the store-assigned room id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the display name of the room.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seating capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the physical location (building/floor).
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Checks whether the room accepts new reservations.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// A validated draft for creating or updating a room.
///
/// # Examples
///
/// ```
/// use bookme::RoomDraft;
///
/// let draft = RoomDraft::new("Boardroom", 12, "HQ / 3rd floor").unwrap();
/// assert_eq!(draft.capacity(), 12);
///
/// assert!(RoomDraft::new("", 12, "HQ").is_err());
/// assert!(RoomDraft::new("Boardroom", 0, "HQ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    name: String,
    capacity: u32,
    location: String,
}

impl RoomDraft {
    /// Validates the fields for a room.
    ///
    /// Name and location must be non-empty after trimming, and capacity
    /// must be at least 1.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn new(
        name: impl Into<String>,
        capacity: u32,
        location: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".to_string(),
                message: "room name must be non-empty".to_string(),
            });
        }

        if capacity < 1 {
            return Err(ValidationError {
                field: "capacity".to_string(),
                message: "capacity must be at least 1".to_string(),
            });
        }

        let location = location.into().trim().to_string();
        if location.is_empty() {
            return Err(ValidationError {
                field: "location".to_string(),
                message: "room location must be non-empty".to_string(),
            });
        }

        Ok(Self {
            name,
            capacity,
            location,
        })
    }

    /// Returns the validated room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the validated capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the validated location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}
