use std::process::ExitCode;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{export::export, extract::extract, init::init, preview::preview, tree::tree},
    exit_status::ExitStatus,
    report,
};
use crate::logging;

/// Main entry point for the locx CLI.
///
/// Parses nothing itself: `args` comes from `Arguments::parse()`. Prints the
/// command's report and maps the result to an exit code.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    logging::init(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run(args)?;
    report::print(&result);

    Ok(result.exit_status().into())
}

/// Dispatch to the command handler.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Tree(cmd)) => tree(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Preview(cmd)) => preview(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
