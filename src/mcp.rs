//! MCP server exposing the PR style operations as tools over stdio.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::actions::{self, ActionOutcome, DEFAULT_BASE_BRANCH, DEFAULT_LEARN_COUNT};

// --- Tool parameter structs ---

#[derive(Debug, Default, Deserialize, JsonSchema)]
struct LearnParams {
    /// Number of PRs to analyze (default: 10)
    count: Option<usize>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct GenerateParams {
    /// Base branch to compare (default: main)
    base_branch: Option<String>,
    /// Include code diff in context (default: false)
    include_diff: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SaveParams {
    /// PR title
    title: String,
    /// PR description body (markdown)
    body: String,
}

// --- MCP Server ---

/// MCP server operating on the git repository of the working directory.
#[derive(Clone)]
pub struct PrStyleServer {
    tool_router: ToolRouter<Self>,
}

impl Default for PrStyleServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PrStyleServer {
    /// Creates a server with all tools registered.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Learn PR writing style from merged pull requests. Analyzes structure, tone, formatting, and common patterns. Run once per repo. Saves to .pr-style.json"
    )]
    async fn learn_pr_style(
        &self,
        Parameters(params): Parameters<LearnParams>,
    ) -> Result<CallToolResult, McpError> {
        let count = params.count.unwrap_or(DEFAULT_LEARN_COUNT);
        Ok(to_tool_result(actions::learn_style(count).await))
    }

    #[tool(
        description = "Generate PR title and description from current git changes. Uses learned team style if available. Analyzes branch name, commits, and file changes."
    )]
    async fn generate_pr(
        &self,
        Parameters(params): Parameters<GenerateParams>,
    ) -> Result<CallToolResult, McpError> {
        let base = params
            .base_branch
            .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string());
        let include_diff = params.include_diff.unwrap_or(false);

        Ok(to_tool_result(actions::generate_pr_text(&base, include_diff)))
    }

    #[tool(
        description = "Save generated PR title and description to PR_DESCRIPTION.md file. Call this after generate_pr to save the output."
    )]
    async fn save_pr_description(
        &self,
        Parameters(params): Parameters<SaveParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(actions::save_pr_description(
            &params.title,
            &params.body,
        )))
    }

    #[tool(description = "Show the learned PR style for this repository.")]
    async fn get_pr_style(&self) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(actions::get_learned_style()))
    }
}

#[tool_handler]
impl ServerHandler for PrStyleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Learns a repository's PR style from merged pull requests and drafts PR descriptions that follow it"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn to_tool_result(outcome: ActionOutcome) -> CallToolResult {
    if outcome.success {
        CallToolResult::success(vec![Content::text(outcome.text)])
    } else {
        CallToolResult::error(vec![Content::text(outcome.text)])
    }
}

/// Start the MCP server on stdio transport.
pub async fn serve() -> anyhow::Result<()> {
    info!("Starting PR style MCP server on stdio");

    let service = PrStyleServer::new().serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
