use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use serde_json::json;

use crate::{
    config::load_config,
    core::{ExtractError, walker::PREVIEW_MAX_COUNT},
    service::ExtractionService,
};

use super::types::{
    CleanupResult, DEFAULT_PAGE_LIMIT, ExportCsvParams, ExportCsvResult,
    FileTranslationsResult, GetFileTranslationsParams, ListSessionParams, ListSessionResult,
    MAX_PAGE_LIMIT, Pagination, PreviewFileParams, PreviewResult, SessionParams,
    UploadFilesParams, UploadResult,
};

/// Domain failures are the caller's to fix, so they surface as invalid params.
fn domain_error(err: ExtractError) -> McpError {
    McpError::invalid_params(err.to_string(), Some(json!({ "kind": err.kind() })))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct LocxMcpServer {
    service: Arc<ExtractionService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LocxMcpServer {
    pub fn new(service: ExtractionService) -> Self {
        Self {
            service: Arc::new(service),
            tool_router: Self::tool_router(),
        }
    }

    /// Process files into a new session
    #[tool(
        description = "Extract translatable text from .zip game bundles or .json data files. Creates a session and returns its id with a summary."
    )]
    pub async fn upload_files(
        &self,
        params: Parameters<UploadFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let upload = self
            .service
            .upload_paths(&params.0.paths)
            .map_err(domain_error)?;

        json_result(&UploadResult {
            session_id: upload.session_id,
            message: upload.bundle.message.clone(),
            file_count: upload.bundle.valid_files.len(),
            entry_count: upload.bundle.translation_entries.len(),
            files: upload
                .bundle
                .valid_files
                .iter()
                .map(|f| f.relative_path.clone())
                .collect(),
        })
    }

    /// Return the stored result bundle
    #[tool(description = "Get the complete stored extraction result of a session.")]
    pub async fn get_result(
        &self,
        params: Parameters<SessionParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = self
            .service
            .result(&params.0.session_id)
            .map_err(domain_error)?;

        json_result(&*bundle)
    }

    /// List files, file tree and a page of entries
    #[tool(
        description = "List a session's files, its folder/file tree and translation entries. Entries are paginated."
    )]
    pub async fn list_session(
        &self,
        params: Parameters<ListSessionParams>,
    ) -> Result<CallToolResult, McpError> {
        let session_id = params.0.session_id;
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let listing = self.service.list(&session_id).map_err(domain_error)?;
        let total_count = listing.translation_entries.len();

        let page: Vec<_> = listing
            .translation_entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect();
        let has_more = offset + page.len() < total_count;

        json_result(&ListSessionResult {
            session_id,
            files: listing.files,
            file_tree: listing.file_tree,
            total_count,
            translation_entries: page,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Entries of one file
    #[tool(description = "Get the translation entries of one file in a session.")]
    pub async fn get_file_translations(
        &self,
        params: Parameters<GetFileTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let GetFileTranslationsParams {
            session_id,
            file_path,
        } = params.0;

        let entries = self
            .service
            .translations_for_file(&session_id, &file_path)
            .map_err(domain_error)?;

        json_result(&FileTranslationsResult {
            file_path,
            total_count: entries.len(),
            translation_entries: entries,
        })
    }

    /// Render entries as CSV
    #[tool(
        description = "Export a session's translation entries (or one file's) as CSV. Returns the CSV inline unless outputPath is given."
    )]
    pub async fn export_csv(
        &self,
        params: Parameters<ExportCsvParams>,
    ) -> Result<CallToolResult, McpError> {
        let ExportCsvParams {
            session_id,
            file_path,
            output_path,
        } = params.0;

        let export = self
            .service
            .export_csv(&session_id, file_path.as_deref())
            .map_err(domain_error)?;
        let row_count = export.row_count;

        let content = match &output_path {
            Some(path) => {
                fs::write(Path::new(path), &export.content).map_err(|e| {
                    McpError::internal_error(format!("Failed to write {}: {}", path, e), None)
                })?;
                None
            }
            None => Some(export.content),
        };

        json_result(&ExportCsvResult {
            filename: export.filename,
            row_count,
            output_path,
            content,
        })
    }

    /// Drop a session
    #[tool(description = "Remove a session's stored result and any scratch data.")]
    pub async fn cleanup_session(
        &self,
        params: Parameters<SessionParams>,
    ) -> Result<CallToolResult, McpError> {
        let session_id = params.0.session_id;
        self.service.cleanup(&session_id).map_err(domain_error)?;

        json_result(&CleanupResult {
            session_id,
            cleaned: true,
        })
    }

    /// Estimate without creating a session
    #[tool(
        description = "Quickly estimate how many translatable strings a JSON file contains, without creating a session."
    )]
    pub async fn preview_file(
        &self,
        params: Parameters<PreviewFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = params.0.path;
        let estimate = self
            .service
            .preview(Path::new(&path))
            .map_err(domain_error)?;

        json_result(&PreviewResult {
            path,
            estimate,
            capped: estimate >= PREVIEW_MAX_COUNT,
        })
    }
}

#[tool_handler]
impl ServerHandler for LocxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Locx MCP extracts translatable text from game data bundles (RPG Maker style data/*.json).\n\n\
                 Available tools:\n\
                 1. preview_file - Estimate translatable strings in one JSON file\n\
                 2. upload_files - Process .zip/.json files into a new session\n\
                 3. list_session - Files, folder tree and paginated entries of a session\n\
                 4. get_file_translations - Entries of one file\n\
                 5. get_result - The complete stored result\n\
                 6. export_csv - CSV of all entries or one file's entries\n\
                 7. cleanup_session - Forget a session\n\n\
                 Recommended Workflow:\n\
                 1. upload_files with the game bundle\n\
                 2. list_session to browse, get_file_translations per file\n\
                 3. export_csv, then cleanup_session"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd)?.config;
    let service = ExtractionService::from_config(&config)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::info!("starting MCP server on stdio");
            let server = LocxMcpServer::new(service)
                .serve(rmcp::transport::stdio())
                .await?;
            server.waiting().await?;
            Ok(())
        })
}
