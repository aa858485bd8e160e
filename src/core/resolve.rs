//! Locates the JSON files of an expanded bundle that qualify as input.

use std::path::Path;

use glob::Pattern;
use tracing::warn;
use walkdir::WalkDir;

use super::types::CandidateFile;
use crate::utils::normalize_relative_path;

/// Directory name that marks game data.
pub const DATA_DIR: &str = "data";

/// True if a `/`-separated path has a `data` segment above its final one.
pub fn is_in_data_directory(relative_path: &str) -> bool {
    let segments: Vec<&str> = relative_path.split('/').collect();
    match segments.iter().position(|s| *s == DATA_DIR) {
        Some(index) => index < segments.len() - 1,
        None => false,
    }
}

/// True if the path ends in `.json`, case-insensitively.
pub fn has_json_extension(path: &str) -> bool {
    path.to_lowercase().ends_with(".json")
}

/// True if a `/`-separated path names a JSON file inside a `data` directory.
pub fn is_data_json(relative_path: &str) -> bool {
    has_json_extension(relative_path) && is_in_data_directory(relative_path)
}

/// Walk `root` and return every data-nested JSON file beneath it.
///
/// Paths matching any of `ignores` (tested against the relative path) are
/// skipped. Unreadable subtrees are logged and skipped.
pub fn find_data_json_files(root: &Path, ignores: &[Pattern]) -> Vec<CandidateFile> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "cannot access path, skipping");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative_path = normalize_relative_path(relative);

        if !is_data_json(&relative_path) {
            continue;
        }
        if ignores.iter().any(|p| p.matches(&relative_path)) {
            continue;
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "cannot stat file, skipping");
                continue;
            }
        };

        files.push(CandidateFile {
            path: entry.path().to_path_buf(),
            name: entry.file_name().to_string_lossy().to_string(),
            relative_path,
            size,
        });
    }

    files
}
