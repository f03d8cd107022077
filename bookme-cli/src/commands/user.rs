//! User command implementations.

use clap::{Args, Subcommand};

use bookme::{Error as LibError, UserDraft};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};

/// Manage users.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Add(AddUserCommand),

    /// Show a user by id
    Show(ShowUserCommand),

    /// List all users
    List(ListUsersCommand),
}

impl UserCommand {
    /// Execute the selected user subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self {
            Self::Add(cmd) => cmd.execute(global),
            Self::Show(cmd) => cmd.execute(global),
            Self::List(cmd) => cmd.execute(global),
        }
    }
}

/// Register a new user.
#[derive(Args)]
pub struct AddUserCommand {
    /// Display name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Output the created user as JSON
    #[arg(long)]
    pub json: bool,
}

impl AddUserCommand {
    /// Execute the user add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = UserDraft::new(self.name, self.email).map_err(LibError::from)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let user = db.create_user(&draft)?;

        if self.json {
            print_json(&user)?;
        } else {
            println!("{}", user.id());
        }
        Ok(())
    }
}

/// Show a user by id.
#[derive(Args)]
pub struct ShowUserCommand {
    /// The user id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output the user as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowUserCommand {
    /// Execute the user show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let user = db.find_user(self.id)?.ok_or(LibError::NotFound {
            resource: format!("user {}", self.id),
        })?;

        if self.json {
            print_json(&user)?;
        } else {
            println!("{}  {}  {}", user.id(), user.name(), user.email());
        }
        Ok(())
    }
}

/// List all users.
#[derive(Args)]
pub struct ListUsersCommand {
    /// Output the users as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListUsersCommand {
    /// Execute the user list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let users = db.list_users()?;

        if self.json {
            print_json(&users)?;
        } else {
            for user in &users {
                println!("{}  {}  {}", user.id(), user.name(), user.email());
            }
        }
        Ok(())
    }
}
