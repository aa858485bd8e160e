//! CSV rendering of translation entries.
//!
//! The format is fixed: six columns, `\n` row separator, and only the two
//! text columns quoted. File and path columns are written verbatim.

use super::types::TranslationEntry;

pub const CSV_HEADER: [&str; 6] = ["File", "Index", "Type", "Path", "Original", "Translation"];

/// Render `entries` in order, numbering rows from 1.
pub fn to_csv(entries: &[TranslationEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for (index, entry) in entries.iter().enumerate() {
        lines.push(
            [
                entry.file.clone(),
                (index + 1).to_string(),
                entry.context.kind.clone(),
                entry.context.path.clone(),
                quote(&entry.original),
                quote(&entry.translated),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
