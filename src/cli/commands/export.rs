use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use super::helper::upload;
use super::{CommandResult, CommandSummary, ExportDestination, ExportSummary};
use crate::cli::args::ExportCommand;

/// Output argument that selects stdout.
pub const STDOUT_MARKER: &str = "-";

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let (service, upload) = upload(&cmd.common, &cmd.files)?;
    let relative_path = cmd.file.as_deref();

    if let Some(path) = relative_path
        && !upload.bundle.valid_files.iter().any(|f| f.relative_path == path)
    {
        warn!(file = %path, "no such file in the extracted input; export will be empty");
    }

    let export = service.export_csv(&upload.session_id, relative_path)?;
    let row_count = export.row_count;

    let (destination, content) = match cmd.output {
        Some(path) if path.as_os_str() == STDOUT_MARKER => {
            (ExportDestination::Stdout, Some(export.content))
        }
        output => {
            let path = output.unwrap_or_else(|| PathBuf::from(&export.filename));
            fs::write(&path, &export.content)
                .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
            (ExportDestination::File(path), None)
        }
    };

    Ok(CommandResult {
        summary: CommandSummary::Export(ExportSummary {
            destination,
            row_count,
            content,
        }),
        found: row_count,
    })
}
