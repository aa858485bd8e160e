//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one handler per subcommand, each returning a `CommandResult`
//! - `report`: human-readable output
//! - `exit_status`: process exit codes

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::{run, run_cli};
