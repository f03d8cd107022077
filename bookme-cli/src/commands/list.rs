//! List command implementation.

use clap::Args;

use bookme::operations::reservations_by_room;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};

/// List the reservations of a room.
#[derive(Args)]
pub struct ListCommand {
    /// Id of the room to list
    #[arg(long, value_name = "ROOM_ID")]
    pub room: i64,

    /// Output the reservations as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let reservations = reservations_by_room(&db, self.room)?;

        if self.json {
            print_json(&reservations)?;
        } else {
            for reservation in &reservations {
                println!(
                    "{}  user {}  {}  {}",
                    reservation.id(),
                    reservation.user_id(),
                    reservation.date(),
                    reservation.hours()
                );
            }
        }
        Ok(())
    }
}
