//! Folder/file hierarchy for navigating a session's files.

use std::collections::HashMap;

use super::resolve::{DATA_DIR, is_data_json};
use super::types::{CandidateFile, FileNode, FileTreeNode, FolderNode};

/// Group data files under one folder per `.../data` prefix.
///
/// Files are re-checked with [`is_data_json`]; anything else is dropped.
/// Folders appear in the order their prefix is first seen and children keep
/// input order.
pub fn build_tree(files: &[CandidateFile]) -> Vec<FileTreeNode> {
    let mut folders: Vec<FolderNode> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for file in files {
        if !is_data_json(&file.relative_path) {
            continue;
        }

        let segments: Vec<&str> = file.relative_path.split('/').collect();
        let Some(data_index) = segments.iter().position(|s| *s == DATA_DIR) else {
            continue;
        };

        let prefix = segments[..=data_index].join("/");
        let slot = match index.get(&prefix) {
            Some(&slot) => slot,
            None => {
                folders.push(FolderNode {
                    id: prefix.clone(),
                    name: folder_name(&segments, data_index),
                    children: Vec::new(),
                });
                index.insert(prefix, folders.len() - 1);
                folders.len() - 1
            }
        };

        folders[slot].children.push(FileTreeNode::File(FileNode {
            id: file.relative_path.clone(),
            name: segments.last().copied().unwrap_or_default().to_string(),
            file: file.clone(),
        }));
    }

    folders.into_iter().map(FileTreeNode::Folder).collect()
}

fn folder_name(segments: &[&str], data_index: usize) -> String {
    match data_index.checked_sub(1).map(|i| segments[i]) {
        Some(parent) if !parent.is_empty() => format!("{}/{}", parent, DATA_DIR),
        _ => DATA_DIR.to_string(),
    }
}
