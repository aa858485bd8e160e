use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{CandidateFile, FileTreeNode, TranslationEntry};

/// Default page size for `list_session`.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Largest page `list_session` will return.
pub const MAX_PAGE_LIMIT: usize = 500;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFilesParams {
    /// Paths of `.zip` archives or `.json` files to process as one batch
    pub paths: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionParams {
    /// Session id returned by upload_files
    pub session_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionParams {
    /// Session id returned by upload_files
    pub session_id: String,
    /// Maximum number of entries to return (default 50, max 500)
    pub limit: Option<u32>,
    /// Number of entries to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFileTranslationsParams {
    /// Session id returned by upload_files
    pub session_id: String,
    /// Relative path of the file, as listed in the session's files
    pub file_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportCsvParams {
    /// Session id returned by upload_files
    pub session_id: String,
    /// Only export entries of this relative path (default: all entries)
    pub file_path: Option<String>,
    /// Write the CSV here instead of returning it inline
    pub output_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewFileParams {
    /// Path of a JSON file
    pub path: String,
}

// ============================================================
// Results
// ============================================================

/// Result of upload_files
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub session_id: String,
    pub message: String,
    pub file_count: usize,
    pub entry_count: usize,
    /// Relative paths of the files that qualified
    pub files: Vec<String>,
}

/// Pagination info for list results
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// Result of list_session
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionResult {
    pub session_id: String,
    pub files: Vec<CandidateFile>,
    pub file_tree: Vec<FileTreeNode>,
    /// Total entries in the session, before pagination
    pub total_count: usize,
    pub translation_entries: Vec<TranslationEntry>,
    pub pagination: Pagination,
}

/// Result of get_file_translations
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileTranslationsResult {
    pub file_path: String,
    pub total_count: usize,
    pub translation_entries: Vec<TranslationEntry>,
}

/// Result of export_csv
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportCsvResult {
    /// Suggested download name
    pub filename: String,
    pub row_count: usize,
    /// Where the CSV was written, when an output path was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// The CSV text, when no output path was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Result of cleanup_session
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResult {
    pub session_id: String,
    pub cleaned: bool,
}

/// Result of preview_file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    pub path: String,
    pub estimate: usize,
    /// True if the estimate hit the preview ceiling
    pub capped: bool,
}
