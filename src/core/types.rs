//! Data model shared by extraction, listing and export.

use std::path::PathBuf;

use enum_dispatch::enum_dispatch;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A JSON file that qualifies as input (lives under a `data` directory).
///
/// Identity within a session is `relative_path`, always `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFile {
    /// Absolute location on disk at the time of extraction.
    pub path: PathBuf,
    pub relative_path: String,
    pub name: String,
    pub size: u64,
}

/// Where an entry came from inside its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryContext {
    /// Human-readable category, e.g. `name-like`, `message`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Dotted key path within the JSON document.
    pub path: String,
}

/// One extracted unit of translatable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    /// `file:path:original`, unique within a bundle.
    pub id: String,
    pub file: String,
    pub original: String,
    #[serde(default)]
    pub translated: String,
    pub context: EntryContext,
}

impl TranslationEntry {
    pub fn new(file: &str, path: &str, original: &str, kind: &str) -> Self {
        Self {
            id: entry_id(file, path, original),
            file: file.to_string(),
            original: original.to_string(),
            translated: String::new(),
            context: EntryContext {
                kind: kind.to_string(),
                path: path.to_string(),
            },
        }
    }
}

/// Composite de-duplication key for an entry.
pub fn entry_id(file: &str, path: &str, original: &str) -> String {
    format!("{}:{}:{}", file, path, original)
}

/// Complete extraction output for one upload session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultBundle {
    pub valid_files: Vec<CandidateFile>,
    pub translation_entries: Vec<TranslationEntry>,
    pub message: String,
}

// ============================================================
// File Tree
// ============================================================

/// Common accessors for tree nodes.
#[enum_dispatch]
pub trait TreeNode {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A `.../data` folder grouping the files found beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Path prefix up to and including the `data` segment.
    pub id: String,
    pub name: String,
    pub children: Vec<FileTreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Full relative path of the file.
    pub id: String,
    pub name: String,
    pub file: CandidateFile,
}

impl TreeNode for FolderNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TreeNode for FileNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Display hierarchy node. Rebuilt on every listing, never persisted.
#[enum_dispatch(TreeNode)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileTreeNode {
    Folder(FolderNode),
    File(FileNode),
}

impl FileTreeNode {
    pub fn children(&self) -> &[FileTreeNode] {
        match self {
            FileTreeNode::Folder(folder) => &folder.children,
            FileTreeNode::File(_) => &[],
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileTreeNode::Folder(_))
    }
}
