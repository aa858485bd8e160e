//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Render a relative path with `/` separators regardless of platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use locx::utils::normalize_relative_path;
///
/// assert_eq!(normalize_relative_path(Path::new("www/data/Map001.json")), "www/data/Map001.json");
/// assert_eq!(normalize_relative_path(Path::new("./data/a.json")), "data/a.json");
/// ```
pub fn normalize_relative_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Final path component of an uploaded file name, with any client-side
/// directories (either separator style) dropped.
pub fn base_file_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Suggested download name for a CSV export.
///
/// Every character outside `[A-Za-z0-9]` in the file path becomes `_`.
pub fn export_file_name(relative_path: Option<&str>) -> String {
    match relative_path {
        Some(path) => {
            let safe: String = path
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            format!("{}_translations.csv", safe)
        }
        None => "all_translations.csv".to_string(),
    }
}

/// `"1 file"` / `"2 files"`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
