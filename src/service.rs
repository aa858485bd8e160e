//! Session-scoped façade over the extraction engine.
//!
//! Front ends (CLI, MCP) talk to this instead of wiring a [`Processor`] and
//! a [`SessionStore`] themselves.

use std::{path::Path, sync::Arc};

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::{
    CsvExport, ExtractError, ExtractResult, Processor, ResultBundle, SessionListing,
    TranslationEntry, UploadedFile, listing,
};
use crate::session::{SessionStore, is_session_id, new_session_id};

/// Outcome of a successful upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub session_id: String,
    pub bundle: Arc<ResultBundle>,
}

pub struct ExtractionService {
    processor: Processor,
    sessions: SessionStore,
}

impl ExtractionService {
    pub fn new(processor: Processor, sessions: SessionStore) -> Self {
        Self {
            processor,
            sessions,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Processor::from_config(config)?,
            SessionStore::with_ttl(config.session_ttl()),
        ))
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    /// Run one extraction under a fresh session id and store the result.
    pub fn upload(&self, files: &[UploadedFile]) -> ExtractResult<Upload> {
        let session_id = new_session_id();
        let bundle = self.processor.process(files, &session_id)?;

        debug!(
            session = %session_id,
            files = bundle.valid_files.len(),
            entries = bundle.translation_entries.len(),
            "stored extraction result"
        );
        let bundle = self.sessions.put(&session_id, bundle);

        Ok(Upload { session_id, bundle })
    }

    /// Read local files and upload them as one batch.
    pub fn upload_paths<P: AsRef<Path>>(&self, paths: &[P]) -> ExtractResult<Upload> {
        let files = paths
            .iter()
            .map(|p| UploadedFile::from_path(p.as_ref()))
            .collect::<ExtractResult<Vec<_>>>()?;
        self.upload(&files)
    }

    /// The stored bundle, as-is.
    pub fn result(&self, session_id: &str) -> ExtractResult<Arc<ResultBundle>> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| ExtractError::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }

    pub fn list(&self, session_id: &str) -> ExtractResult<SessionListing> {
        Ok(listing::list_for_session(&*self.result(session_id)?))
    }

    pub fn translations_for_file(
        &self,
        session_id: &str,
        relative_path: &str,
    ) -> ExtractResult<Vec<TranslationEntry>> {
        Ok(listing::translations_for_file(
            &*self.result(session_id)?,
            relative_path,
        ))
    }

    pub fn export_csv(
        &self,
        session_id: &str,
        relative_path: Option<&str>,
    ) -> ExtractResult<CsvExport> {
        Ok(listing::export_csv(&*self.result(session_id)?, relative_path))
    }

    /// Forget a session and remove any scratch data it left behind.
    pub fn cleanup(&self, session_id: &str) -> ExtractResult<()> {
        if !is_session_id(session_id) {
            return Err(ExtractError::SessionNotFound {
                session_id: session_id.to_string(),
            });
        }

        let existed = self.sessions.delete(session_id);

        if let Err(e) = self.processor.cleanup_session(session_id) {
            warn!(session = %session_id, error = %e, "failed to remove scratch data");
        }

        if !existed {
            return Err(ExtractError::SessionNotFound {
                session_id: session_id.to_string(),
            });
        }
        debug!(session = %session_id, "session cleaned up");
        Ok(())
    }

    /// Estimate the translatable strings of one local JSON file.
    pub fn preview(&self, path: &Path) -> ExtractResult<usize> {
        self.processor.preview_file(path)
    }
}
