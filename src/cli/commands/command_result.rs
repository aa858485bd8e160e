use std::{collections::HashMap, path::PathBuf, sync::Arc};

use crate::core::{FileTreeNode, ResultBundle};

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Tree(TreeSummary),
    Export(ExportSummary),
    Preview(PreviewSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub session_id: String,
    pub bundle: Arc<ResultBundle>,
    /// Print the bundle as JSON instead of a summary.
    pub json: bool,
}

#[derive(Debug)]
pub struct TreeSummary {
    pub tree: Vec<FileTreeNode>,
    /// Entry count per relative path.
    pub entry_counts: HashMap<String, usize>,
}

#[derive(Debug)]
pub enum ExportDestination {
    Stdout,
    File(PathBuf),
}

#[derive(Debug)]
pub struct ExportSummary {
    pub destination: ExportDestination,
    pub row_count: usize,
    /// CSV text; only kept when it still has to be printed.
    pub content: Option<String>,
}

#[derive(Debug)]
pub struct PreviewSummary {
    pub path: PathBuf,
    pub estimate: usize,
    /// True if the estimate hit the preview ceiling.
    pub capped: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running locx commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Translatable strings the command found (or estimated).
    pub found: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match self.summary {
            CommandSummary::Init(_) => ExitStatus::Success,
            _ => ExitStatus::for_found(self.found),
        }
    }
}
