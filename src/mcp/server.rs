use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use super::types::{
    ClassifiedItem, ClassifyTextParams, ClassifyTextResult, ConfigDto, GetConfigParams,
    Pagination, ScanStats, ScanStringsParams, ScanStringsResult, SyncLocalesParams,
    SyncLocalesResult,
};
use crate::{
    config::load_config,
    core::{HarvestContext, classify::Classifier, pipeline},
};

#[derive(Clone)]
pub struct HarvestMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for HarvestMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl HarvestMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get the harvest configuration of a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file(),
            config: result.config,
        })
    }

    #[tool(
        description = "Classify texts as translatable prose or technical content. Rejected texts come with a reason such as css_content or code_content."
    )]
    pub async fn classify_text(
        &self,
        params: Parameters<ClassifyTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let classifier = match &params.project_root_path {
            Some(path) => context(path)?.classifier,
            None => Classifier::default(),
        };

        let items: Vec<ClassifiedItem> = params
            .texts
            .into_iter()
            .map(|text| {
                let result = classifier.classify(&text);
                ClassifiedItem {
                    text,
                    accepted: result.accepted,
                    reason: result.reason,
                }
            })
            .collect();
        let accepted_count = items.iter().filter(|i| i.accepted).count();

        json_result(&ClassifyTextResult {
            accepted_count,
            rejected_count: items.len() - accepted_count,
            items,
        })
    }

    #[tool(
        description = "Dry-run extraction: find translatable strings and the keys they would get, without writing anything. Returns counts and a paginated list."
    )]
    pub async fn scan_strings(
        &self,
        params: Parameters<ScanStringsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(200);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);
        let new_only = params.new_only.unwrap_or(false);

        let ctx = context(&params.project_root_path)?;
        let report = pipeline::extract(&ctx, false)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

        let stats = ScanStats {
            files_processed: report.files_processed,
            skipped_files: report.skipped_files,
            accepted: report.accepted,
            rejected: report.rejected,
            new_keys: report.new_keys.len(),
            conflicts: report.conflicts,
        };

        let all_items: Vec<_> = report
            .candidates
            .into_iter()
            .filter(|c| !new_only || c.is_new)
            .collect();
        let total_count = all_items.len();
        let items: Vec<_> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        json_result(&ScanStringsResult {
            base_locale: report.base_locale,
            stats,
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    #[tool(
        description = "Copy keys missing from other locales over from the base locale. Existing translations are never changed. Dry run unless apply is true."
    )]
    pub async fn sync_locales(
        &self,
        params: Parameters<SyncLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = context(&params.project_root_path)?;
        let report = pipeline::sync(&ctx, params.apply.unwrap_or(false))
            .map_err(|e| McpError::internal_error(format!("Sync failed: {:#}", e), None))?;

        json_result(&SyncLocalesResult {
            base_locale: report.base_locale,
            applied: report.applied,
            locales: report.locales,
            files: report
                .writes
                .iter()
                .map(|w| w.path.to_string_lossy().to_string())
                .collect(),
        })
    }
}

#[tool_handler]
impl ServerHandler for HarvestMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Harvest MCP helps AI agents move hardcoded UI text into locale files.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. classify_text - Check whether texts are translatable prose\n\
                 3. scan_strings - Dry-run extraction with proposed keys (paginated)\n\
                 4. sync_locales - Fill other locales with keys missing from the base locale\n\n\
                 Run `harvest extract --apply` to write the keys scan_strings proposes."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Context for a project, with config paths resolved against the config file's directory.
fn context(project_root_path: &str) -> Result<HarvestContext, McpError> {
    let root = Path::new(project_root_path);
    load_config(root)
        .and_then(|loaded| {
            let project_dir = loaded.base_dir(root);
            HarvestContext::from_config(loaded.config, &project_dir, false)
        })
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = HarvestMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
