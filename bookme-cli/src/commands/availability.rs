//! Availability command implementation.

use clap::Args;

use bookme::{room_availability, AvailabilityCache};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, print_json, GlobalOptions};

/// Show the free slots of a room on a date.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Id of the room to query
    #[arg(long, value_name = "ROOM_ID")]
    pub room: i64,

    /// Date to query (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Output the availability as JSON
    #[arg(long)]
    pub json: bool,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date(&self.date)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let cache = AvailabilityCache::with_ttl(config.effective_cache_ttl());

        let availability = room_availability(&db, &cache, self.room, date)?;

        if self.json {
            print_json(&availability)?;
        } else {
            let slots: Vec<String> = availability
                .free_slots()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("{}", slots.join(" "));
        }
        Ok(())
    }
}
