//! MCP Server implementation for fantasy player comparison
//!
//! Tools delegate to the handlers module. The server holds only immutable
//! config, so concurrent calls never share mutable state.

use std::sync::Arc;

use mcp_common::{
    async_trait, CallToolResult, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::config::Config;
use crate::handlers;
use crate::params::*;

const INSTRUCTIONS: &str = "Fantasy basketball comparison MCP server. \
    compare_players takes two per-game stat lines and returns chart-ready dashboard data: \
    fantasy scores (ppg + 1.2*rpg + 1.5*apg + 3*spg + 3*bpg + three_pm - tov by default), \
    the overall winner by score, per-category winners (fewer turnovers wins), \
    a normalized radar series and head-to-head bar series.";

/// The Fantasy Compare MCP Server
#[derive(Clone)]
pub struct FantasyCompareMcpServer {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl FantasyCompareMcpServer {
    /// Create a new server, loading config from the standard locations
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Self {
        tracing::debug!(season = %config.season.default, "Fantasy compare config ready");
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[tool(
        description = "Compare two basketball players' fantasy value. Returns a rendering-ready artifact with both fantasy scores, the overall winner, per-category winners, radar and head-to-head chart series."
    )]
    async fn compare_players(
        &self,
        Parameters(params): Parameters<ComparePlayersParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::compare_players(&self.config, params)
    }

    #[tool(description = "Compute one player's fantasy score with a per-category breakdown")]
    async fn score_player(
        &self,
        Parameters(params): Parameters<ScorePlayerParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::score_player(&self.config, params)
    }

    #[tool(description = "Show the active fantasy scoring weights and the default season")]
    async fn get_scoring_weights(&self) -> Result<CallToolResult, McpError> {
        handlers::get_scoring_weights(&self.config)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for FantasyCompareMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for FantasyCompareMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for FantasyCompareMcpServer {
    fn server_name(&self) -> &str {
        "fantasy-compare"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "compare_players" => {
                let params: ComparePlayersParams = serde_json::from_value(params)?;
                self.compare_players(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "score_player" => {
                let params: ScorePlayerParams = serde_json::from_value(params)?;
                self.score_player(Parameters(params)).await.map_err(Into::into)
            }

            "get_scoring_weights" => self.get_scoring_weights().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
