//! Extraction engine.
//!
//! ## Pipeline
//!
//! 1. `processor` materialises uploads and dispatches on file kind
//! 2. `archive` + `resolve` expand ZIPs and pick out `data/**/*.json`
//! 3. `walker` runs `classify` over every string leaf
//! 4. `tree`, `csv` and `listing` derive views from a stored bundle

pub mod archive;
pub mod classify;
pub mod csv;
pub mod error;
pub mod listing;
pub mod processor;
pub mod resolve;
pub mod tree;
pub mod types;
pub mod walker;

pub use classify::{Classifier, context_type, is_translatable};
pub use error::{ExtractError, ExtractResult};
pub use listing::{CsvExport, SessionListing, export_csv, list_for_session, translations_for_file};
pub use processor::{FileKind, Processor, UploadedFile};
pub use tree::build_tree;
pub use types::{
    CandidateFile, EntryContext, FileNode, FileTreeNode, FolderNode, ResultBundle,
    TranslationEntry, TreeNode,
};
pub use walker::{estimate_translatable, extract, extract_with};
