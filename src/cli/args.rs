//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translatable text from ZIP bundles or JSON files
//! - `tree`: Show the data folders and files found in the input
//! - `export`: Write the extracted text as CSV
//! - `preview`: Estimate how much text one JSON file holds
//! - `init`: Initialize locx configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Tree(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Preview(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Scratch directory for unpacked uploads (overrides config file)
    #[arg(long, env = "LOCX_SCRATCH_DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// ZIP archives or JSON files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TreeCommand {
    /// ZIP archives or JSON files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// ZIP archives or JSON files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only export entries of this file (relative path, e.g. data/Actors.json)
    #[arg(long)]
    pub file: Option<String>,

    /// Output path, or `-` for stdout (default: suggested name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PreviewCommand {
    /// JSON file to estimate
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable text and print a summary
    Extract(ExtractCommand),
    /// Show the data folders and files found in the input
    Tree(TreeCommand),
    /// Export extracted text as CSV
    Export(ExportCommand),
    /// Estimate the number of translatable strings in a JSON file
    Preview(PreviewCommand),
    /// Initialize a new .locxrc.json configuration file
    Init,
    /// Start MCP server for AI agents
    Serve,
}
