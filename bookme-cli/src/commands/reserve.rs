//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books a room for a
//! user on a date with an hour interval.

use clap::Args;

use bookme::operations::{create_reservation, ReserveRequest};
use bookme::{AvailabilityCache, Logger};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, print_json, GlobalOptions};

/// Book a room for a user.
#[derive(Args)]
pub struct ReserveCommand {
    /// Id of the booking user
    #[arg(long, value_name = "USER_ID")]
    pub user: i64,

    /// Id of the room to book
    #[arg(long, value_name = "ROOM_ID")]
    pub room: i64,

    /// Booking date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Start hour, inclusive (0-23)
    #[arg(long, value_name = "HOUR")]
    pub start: u8,

    /// End hour, exclusive (0-23)
    #[arg(long, value_name = "HOUR")]
    pub end: u8,

    /// Output the created reservation as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let date = parse_date(&self.date)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let cache = AvailabilityCache::with_ttl(config.effective_cache_ttl());

        let request = ReserveRequest::new(self.user, self.room, date, self.start, self.end);
        let reservation = create_reservation(&mut db, &cache, &request)?;

        logger.debug(&format!(
            "Booked room {} on {} for user {}",
            reservation.room_id(),
            reservation.date(),
            reservation.user_id()
        ));

        if self.json {
            print_json(&reservation)?;
        } else {
            // Shell-friendly: just the new reservation id
            println!("{}", reservation.id());
        }
        Ok(())
    }
}
