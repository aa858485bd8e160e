use std::collections::HashMap;

use anyhow::Result;

use super::helper::upload;
use super::{CommandResult, CommandSummary, TreeSummary};
use crate::cli::args::TreeCommand;

pub fn tree(cmd: TreeCommand) -> Result<CommandResult> {
    let (service, upload) = upload(&cmd.common, &cmd.files)?;
    let listing = service.list(&upload.session_id)?;

    let mut entry_counts: HashMap<String, usize> = HashMap::new();
    for entry in &listing.translation_entries {
        *entry_counts.entry(entry.file.clone()).or_default() += 1;
    }

    Ok(CommandResult {
        summary: CommandSummary::Tree(TreeSummary {
            tree: listing.file_tree,
            entry_counts,
        }),
        found: listing.translation_entries.len(),
    })
}
