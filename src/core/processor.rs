//! Extraction orchestrator: uploads in, one [`ResultBundle`] out.
//!
//! Each uploaded file is materialised under `<scratch>/<session id>/`,
//! dispatched on its extension, and the scratch directory is removed again
//! once the file is done, whether it succeeded or not. Files are processed
//! one at a time.

use std::{
    collections::HashSet,
    fs, io,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde_json::Value;
use tracing::{debug, warn};

use super::archive::expand_zip;
use super::classify::Classifier;
use super::error::{ExtractError, ExtractResult};
use super::resolve::{DATA_DIR, find_data_json_files};
use super::types::{CandidateFile, ResultBundle, TranslationEntry};
use super::walker::{estimate_translatable, extract_with};
use crate::config::Config;
use crate::utils::{base_file_name, plural};

/// Subdirectory of a session's scratch space that archives expand into.
pub const EXTRACTED_DIR: &str = "extracted";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A file as received from the caller.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original client-side name; only the final component is used.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a local file as if it had been uploaded.
    pub fn from_path(path: &Path) -> ExtractResult<Self> {
        let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Zip,
    Json,
}

impl FileKind {
    /// Classify by case-insensitive extension.
    pub fn detect(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".zip") {
            Some(FileKind::Zip)
        } else if lower.ends_with(".json") {
            Some(FileKind::Json)
        } else {
            None
        }
    }
}

/// Removes a session's scratch directory when dropped.
struct ScratchGuard {
    dir: PathBuf,
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        if let Err(e) = remove_dir_if_exists(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "failed to remove scratch directory");
        }
    }
}

fn remove_dir_if_exists(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Parse JSON bytes, tolerating a leading UTF-8 byte-order mark.
pub fn parse_json(bytes: &[u8], path: &Path) -> ExtractResult<Value> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    serde_json::from_slice(bytes).map_err(|source| ExtractError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct Processor {
    scratch_root: PathBuf,
    classifier: Classifier,
    ignores: Vec<Pattern>,
}

impl Processor {
    pub fn new(scratch_root: impl Into<PathBuf>) -> Self {
        Self {
            scratch_root: scratch_root.into(),
            classifier: Classifier::default(),
            ignores: Vec::new(),
        }
    }

    /// Build a processor from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(config.scratch_path())
            .with_classifier(Classifier::with_extra_key_fields(&config.extra_key_fields))
            .with_ignores(ignores))
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_ignores(mut self, ignores: Vec<Pattern>) -> Self {
        self.ignores = ignores;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn scratch_root(&self) -> &Path {
        &self.scratch_root
    }

    /// Scratch directory of a session.
    ///
    /// The id must be a single plain path component, so the result always
    /// stays directly under the scratch root.
    pub fn session_dir(&self, session_id: &str) -> ExtractResult<PathBuf> {
        let mut components = Path::new(session_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.scratch_root.join(session_id)),
            _ => Err(ExtractError::SessionNotFound {
                session_id: session_id.to_string(),
            }),
        }
    }

    /// Process one upload request.
    ///
    /// A single file's failure is returned as-is. In a batch, failing files
    /// are logged and skipped; the batch fails only if every file failed.
    pub fn process(&self, files: &[UploadedFile], session_id: &str) -> ExtractResult<ResultBundle> {
        match files {
            [] => Err(ExtractError::NoFileSelected),
            [file] => self.process_file(file, session_id),
            _ => self.process_many(files, session_id),
        }
    }

    /// Process a batch, merging every successful file into one bundle.
    pub fn process_many(
        &self,
        files: &[UploadedFile],
        session_id: &str,
    ) -> ExtractResult<ResultBundle> {
        if files.is_empty() {
            return Err(ExtractError::NoFileSelected);
        }

        let mut merger = BundleMerger::default();
        let mut first_error = None;

        for file in files {
            match self.process_file(file, session_id) {
                Ok(bundle) => merger.absorb(bundle),
                Err(e) => {
                    warn!(file = %file.name, error = %e, "failed to process file, skipping");
                    first_error.get_or_insert(e);
                }
            }
        }

        if merger.absorbed == 0
            && let Some(err) = first_error
        {
            return Err(err);
        }

        Ok(merger.finish(files.len()))
    }

    /// Materialise, classify and extract a single uploaded file.
    pub fn process_file(&self, file: &UploadedFile, session_id: &str) -> ExtractResult<ResultBundle> {
        let name = base_file_name(&file.name);
        let kind = FileKind::detect(name).ok_or_else(|| ExtractError::UnsupportedFileType {
            name: file.name.clone(),
        })?;

        let session_dir = self.session_dir(session_id)?;
        fs::create_dir_all(&session_dir).map_err(|e| ExtractError::io(&session_dir, e))?;
        let _guard = ScratchGuard {
            dir: session_dir.clone(),
        };

        let path = session_dir.join(name);
        fs::write(&path, &file.bytes).map_err(|e| ExtractError::io(&path, e))?;

        let bundle = match kind {
            FileKind::Zip => self.process_zip(&path, &session_dir, name)?,
            FileKind::Json => self.process_json(&path, name)?,
        };

        debug!(
            file = %file.name,
            valid_files = bundle.valid_files.len(),
            entries = bundle.translation_entries.len(),
            "processed upload"
        );
        Ok(bundle)
    }

    fn process_zip(&self, zip_path: &Path, session_dir: &Path, name: &str) -> ExtractResult<ResultBundle> {
        let extract_dir = session_dir.join(EXTRACTED_DIR);
        expand_zip(zip_path, &extract_dir)?;

        let files = find_data_json_files(&extract_dir, &self.ignores);
        if files.is_empty() {
            return Err(ExtractError::NoQualifyingFiles {
                name: name.to_string(),
            });
        }

        let entries = self.extract_files(&files);
        let message = format!(
            "Extracted {} from the ZIP archive and {}",
            plural(files.len(), "JSON file", "JSON files"),
            plural(entries.len(), "translatable string", "translatable strings"),
        );

        Ok(ResultBundle {
            valid_files: files,
            translation_entries: entries,
            message,
        })
    }

    /// A bare JSON upload stands for `data/<name>`.
    fn process_json(&self, path: &Path, name: &str) -> ExtractResult<ResultBundle> {
        let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
        let value = parse_json(&bytes, path)?;

        let file = CandidateFile {
            path: path.to_path_buf(),
            relative_path: format!("{}/{}", DATA_DIR, name),
            name: name.to_string(),
            size: bytes.len() as u64,
        };
        let entries = extract_with(&self.classifier, &value, &file.relative_path);
        let message = format!(
            "Processed 1 JSON file and extracted {}",
            plural(entries.len(), "translatable string", "translatable strings"),
        );

        Ok(ResultBundle {
            valid_files: vec![file],
            translation_entries: entries,
            message,
        })
    }

    /// Walk each candidate in order. Unreadable or malformed files are
    /// logged and contribute nothing.
    pub fn extract_files(&self, files: &[CandidateFile]) -> Vec<TranslationEntry> {
        let mut entries = Vec::new();

        for file in files {
            let value = fs::read(&file.path)
                .map_err(|e| ExtractError::io(&file.path, e))
                .and_then(|bytes| parse_json(&bytes, &file.path));

            match value {
                Ok(value) => {
                    entries.extend(extract_with(&self.classifier, &value, &file.relative_path))
                }
                Err(e) => warn!(file = %file.relative_path, error = %e, "failed to extract file"),
            }
        }

        entries
    }

    /// Estimate how many strings a local JSON file would yield.
    pub fn preview_file(&self, path: &Path) -> ExtractResult<usize> {
        let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
        let value = parse_json(&bytes, path)?;
        Ok(estimate_translatable(&self.classifier, &value))
    }

    /// Remove whatever scratch data a session still holds.
    pub fn cleanup_session(&self, session_id: &str) -> ExtractResult<()> {
        let dir = self.session_dir(session_id)?;
        remove_dir_if_exists(&dir).map_err(|e| ExtractError::io(&dir, e))
    }
}

/// Accumulates per-file bundles, keeping bundle invariants: one candidate
/// per relative path, one entry per id.
#[derive(Default)]
struct BundleMerger {
    valid_files: Vec<CandidateFile>,
    entries: Vec<TranslationEntry>,
    seen_paths: HashSet<String>,
    seen_ids: HashSet<String>,
    absorbed: usize,
    tallied_valid: usize,
    tallied_entries: usize,
}

impl BundleMerger {
    fn absorb(&mut self, bundle: ResultBundle) {
        self.absorbed += 1;
        self.tallied_valid += bundle.valid_files.len();
        self.tallied_entries += bundle.translation_entries.len();

        // First upload to claim a path owns it and its entries.
        let mut claimed = HashSet::new();
        for file in bundle.valid_files {
            if self.seen_paths.insert(file.relative_path.clone()) {
                claimed.insert(file.relative_path.clone());
                self.valid_files.push(file);
            }
        }

        for entry in bundle.translation_entries {
            if claimed.contains(&entry.file) && self.seen_ids.insert(entry.id.clone()) {
                self.entries.push(entry);
            }
        }
    }

    fn finish(self, processed: usize) -> ResultBundle {
        let message = format!(
            "Processed {}, found {}, extracted {} translation entries",
            plural(processed, "file", "files"),
            plural(self.tallied_valid, "valid file", "valid files"),
            self.tallied_entries,
        );

        ResultBundle {
            valid_files: self.valid_files,
            translation_entries: self.entries,
            message,
        }
    }
}
