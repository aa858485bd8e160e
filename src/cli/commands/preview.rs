use anyhow::Result;

use super::helper::load_service;
use super::{CommandResult, CommandSummary, PreviewSummary};
use crate::cli::args::PreviewCommand;
use crate::core::walker::PREVIEW_MAX_COUNT;

pub fn preview(cmd: PreviewCommand) -> Result<CommandResult> {
    let service = load_service(&cmd.common)?;
    let estimate = service.preview(&cmd.file)?;

    Ok(CommandResult {
        summary: CommandSummary::Preview(PreviewSummary {
            path: cmd.file,
            estimate,
            capped: estimate >= PREVIEW_MAX_COUNT,
        }),
        found: estimate,
    })
}
