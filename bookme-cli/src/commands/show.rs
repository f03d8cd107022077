//! Show command implementation.

use clap::Args;

use bookme::operations::reservation_by_id;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};

/// Show a reservation by id.
#[derive(Args)]
pub struct ShowCommand {
    /// The reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output the reservation as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let reservation = reservation_by_id(&db, self.id)?;

        if self.json {
            print_json(&reservation)?;
        } else {
            println!(
                "{}  user {}  room {}  {}  {}",
                reservation.id(),
                reservation.user_id(),
                reservation.room_id(),
                reservation.date(),
                reservation.hours()
            );
        }
        Ok(())
    }
}
