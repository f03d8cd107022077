//! Init command implementation.
//!
//! Creates the data directory and initializes the database schema. Safe to
//! run repeatedly: an existing database passes the schema check unchanged.

use clap::Args;

use bookme::{Database, DatabaseConfig, Logger};

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Initialize the data directory and database.
#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        std::fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join("bookme.db");
        logger.debug(&format!("Initializing database at {}", db_path.display()));

        // Opening runs the schema check and creates missing tables
        Database::open(DatabaseConfig::new(&db_path))?;

        if !global.quiet {
            println!("{}", db_path.display());
        }
        Ok(())
    }
}
