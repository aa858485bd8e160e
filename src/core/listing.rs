//! Read-only views over a stored [`ResultBundle`].

use schemars::JsonSchema;
use serde::Serialize;

use super::csv::to_csv;
use super::tree::build_tree;
use super::types::{CandidateFile, FileTreeNode, ResultBundle, TranslationEntry};
use crate::utils::export_file_name;

/// Everything a client needs to browse a session.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionListing {
    pub files: Vec<CandidateFile>,
    pub file_tree: Vec<FileTreeNode>,
    pub translation_entries: Vec<TranslationEntry>,
}

/// A rendered CSV plus the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub filename: String,
    /// Exported entries, header excluded. Quoted fields may span lines, so
    /// this is not the line count of `content`.
    pub row_count: usize,
    pub content: String,
}

pub fn list_for_session(bundle: &ResultBundle) -> SessionListing {
    SessionListing {
        files: bundle.valid_files.clone(),
        file_tree: build_tree(&bundle.valid_files),
        translation_entries: bundle.translation_entries.clone(),
    }
}

/// Entries whose `file` equals `relative_path` exactly, in bundle order.
pub fn translations_for_file(bundle: &ResultBundle, relative_path: &str) -> Vec<TranslationEntry> {
    bundle
        .translation_entries
        .iter()
        .filter(|e| e.file == relative_path)
        .cloned()
        .collect()
}

/// Export one file's entries, or every entry when `relative_path` is `None`.
pub fn export_csv(bundle: &ResultBundle, relative_path: Option<&str>) -> CsvExport {
    let (row_count, content) = match relative_path {
        Some(path) => {
            let entries = translations_for_file(bundle, path);
            (entries.len(), to_csv(&entries))
        }
        None => (
            bundle.translation_entries.len(),
            to_csv(&bundle.translation_entries),
        ),
    };

    CsvExport {
        filename: export_file_name(relative_path),
        row_count,
        content,
    }
}
