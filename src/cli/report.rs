//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow locx to be used as a library. Every
//! printer writes to a generic writer so output can be captured in tests.

use std::collections::HashMap;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExportDestination, ExportSummary, ExtractSummary, InitSummary,
    PreviewSummary, TreeSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ResultBundle, TreeNode};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const TREE_BRANCH: &str = "├── ";
const TREE_LAST: &str = "└── ";

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, writer),
        CommandSummary::Tree(summary) => print_tree(summary, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Preview(summary) => print_preview(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_extract<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    if summary.json {
        match serde_json::to_string_pretty(&*summary.bundle) {
            Ok(json) => {
                let _ = writeln!(writer, "{}", json);
            }
            Err(e) => tracing::error!(error = %e, "failed to serialize result"),
        }
        return;
    }

    print_file_counts(&summary.bundle, writer);
    print_outcome(&summary.bundle.message, summary.bundle.translation_entries.is_empty(), writer);
}

fn print_file_counts<W: Write>(bundle: &ResultBundle, writer: &mut W) {
    let counts = entry_counts(bundle);
    let max_width = bundle
        .valid_files
        .iter()
        .map(|f| UnicodeWidthStr::width(f.relative_path.as_str()))
        .max()
        .unwrap_or(0);

    for file in &bundle.valid_files {
        let count = counts.get(file.relative_path.as_str()).copied().unwrap_or(0);
        let padding = max_width - UnicodeWidthStr::width(file.relative_path.as_str());
        let count_str = plural(count, "string", "strings");
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {}",
            file.relative_path,
            "",
            if count == 0 {
                count_str.dimmed()
            } else {
                count_str.normal()
            },
            padding = padding
        );
    }
}

fn print_outcome<W: Write>(message: &str, nothing_found: bool, writer: &mut W) {
    if nothing_found {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!("{} - nothing to translate", message).yellow()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    }
}

fn print_tree<W: Write>(summary: &TreeSummary, writer: &mut W) {
    for folder in &summary.tree {
        let _ = writeln!(writer, "{}", folder.name().bold().blue());

        let children = folder.children();
        let max_width = children
            .iter()
            .map(|c| UnicodeWidthStr::width(c.name()))
            .max()
            .unwrap_or(0);

        for (i, child) in children.iter().enumerate() {
            let branch = if i + 1 == children.len() {
                TREE_LAST
            } else {
                TREE_BRANCH
            };
            let padding = max_width - UnicodeWidthStr::width(child.name());
            let count = summary.entry_counts.get(child.id()).copied().unwrap_or(0);
            let _ = writeln!(
                writer,
                "{}{}{:padding$}  {}",
                branch.dimmed(),
                child.name(),
                "",
                count.to_string().cyan(),
                padding = padding
            );
        }
    }

    let files: usize = summary.tree.iter().map(|f| f.children().len()).sum();
    let folders = summary.tree.iter().filter(|n| n.is_folder()).count();
    let _ = writeln!(
        writer,
        "\n{} in {}",
        plural(files, "file", "files"),
        plural(folders, "folder", "folders")
    );
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    match &summary.destination {
        ExportDestination::Stdout => {
            if let Some(content) = &summary.content {
                let _ = writeln!(writer, "{}", content);
            }
        }
        ExportDestination::File(path) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} to {}",
                    plural(summary.row_count, "row", "rows"),
                    path.display()
                )
                .green()
            );
        }
    }
}

fn print_preview<W: Write>(summary: &PreviewSummary, writer: &mut W) {
    let estimate = if summary.capped {
        format!("{}+", summary.estimate)
    } else {
        summary.estimate.to_string()
    };
    let _ = writeln!(
        writer,
        "{}: ~{} translatable {}",
        summary.path.display(),
        estimate.bold(),
        if summary.estimate == 1 { "string" } else { "strings" }
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn entry_counts(bundle: &ResultBundle) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for entry in &bundle.translation_entries {
        *counts.entry(entry.file.as_str()).or_default() += 1;
    }
    counts
}

// ============================================================
// Tests
// ============================================================
