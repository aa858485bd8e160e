use anyhow::Result;

use super::helper::upload;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::cli::args::ExtractCommand;

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let (_service, upload) = upload(&cmd.common, &cmd.files)?;
    let found = upload.bundle.translation_entries.len();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            session_id: upload.session_id,
            bundle: upload.bundle,
            json: cmd.json,
        }),
        found,
    })
}
