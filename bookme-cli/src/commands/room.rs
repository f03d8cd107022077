//! Room command implementations.

use clap::{Args, Subcommand};

use bookme::{Error as LibError, Room, RoomDraft};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};

/// Manage rooms.
#[derive(Subcommand)]
pub enum RoomCommand {
    /// Create a new room
    Add(AddRoomCommand),

    /// Show a room by id
    Show(ShowRoomCommand),

    /// List all rooms
    List(ListRoomsCommand),

    /// Replace a room's fields
    Update(UpdateRoomCommand),

    /// Delete a room without upcoming reservations
    Delete(DeleteRoomCommand),
}

impl RoomCommand {
    /// Execute the selected room subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self {
            Self::Add(cmd) => cmd.execute(global),
            Self::Show(cmd) => cmd.execute(global),
            Self::List(cmd) => cmd.execute(global),
            Self::Update(cmd) => cmd.execute(global),
            Self::Delete(cmd) => cmd.execute(global),
        }
    }
}

fn print_room(room: &Room) {
    let state = if room.is_active() { "active" } else { "inactive" };
    println!(
        "{}  {}  cap {}  {}  {}",
        room.id(),
        room.name(),
        room.capacity(),
        room.location(),
        state
    );
}

/// Create a new room.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Display name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Seating capacity (at least 1)
    #[arg(long, value_name = "CAPACITY")]
    pub capacity: u32,

    /// Physical location (building/floor)
    #[arg(long, value_name = "LOCATION")]
    pub location: String,

    /// Output the created room as JSON
    #[arg(long)]
    pub json: bool,
}

impl AddRoomCommand {
    /// Execute the room add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = RoomDraft::new(self.name, self.capacity, self.location).map_err(LibError::from)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let room = db.create_room(&draft)?;

        if self.json {
            print_json(&room)?;
        } else {
            println!("{}", room.id());
        }
        Ok(())
    }
}

/// Show a room by id.
#[derive(Args)]
pub struct ShowRoomCommand {
    /// The room id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output the room as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowRoomCommand {
    /// Execute the room show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let room = db.find_room(self.id)?.ok_or(LibError::NotFound {
            resource: format!("room {}", self.id),
        })?;

        if self.json {
            print_json(&room)?;
        } else {
            print_room(&room);
        }
        Ok(())
    }
}

/// List all rooms.
#[derive(Args)]
pub struct ListRoomsCommand {
    /// Output the rooms as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListRoomsCommand {
    /// Execute the room list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let rooms = db.list_rooms()?;

        if self.json {
            print_json(&rooms)?;
        } else {
            for room in &rooms {
                print_room(room);
            }
        }
        Ok(())
    }
}

/// Replace a room's fields.
#[derive(Args)]
pub struct UpdateRoomCommand {
    /// The room id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New display name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// New seating capacity (at least 1)
    #[arg(long, value_name = "CAPACITY")]
    pub capacity: u32,

    /// New physical location
    #[arg(long, value_name = "LOCATION")]
    pub location: String,

    /// Mark the room inactive (rejects new bookings)
    #[arg(long)]
    pub inactive: bool,

    /// Output the updated room as JSON
    #[arg(long)]
    pub json: bool,
}

impl UpdateRoomCommand {
    /// Execute the room update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = RoomDraft::new(self.name, self.capacity, self.location).map_err(LibError::from)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let room = db.update_room(self.id, &draft, !self.inactive)?;

        if self.json {
            print_json(&room)?;
        } else {
            print_room(&room);
        }
        Ok(())
    }
}

/// Delete a room without upcoming reservations.
#[derive(Args)]
pub struct DeleteRoomCommand {
    /// The room id
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl DeleteRoomCommand {
    /// Execute the room delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let today = chrono::Local::now().date_naive();
        db.delete_room(self.id, today)?;

        if !global.quiet {
            println!("Deleted room {}", self.id);
        }
        Ok(())
    }
}
