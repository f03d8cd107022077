//! CLI command implementations.

mod availability;
mod completions;
mod init;
mod list;
mod reserve;
mod room;
mod show;
mod user;

pub use availability::AvailabilityCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use room::RoomCommand;
pub use show::ShowCommand;
pub use user::UserCommand;
