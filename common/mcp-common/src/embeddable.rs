//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! stdio transport in between. Integration tests use it the same way.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use fantasy_compare_mcp::FantasyCompareMcpServer;
//!
//! let server = FantasyCompareMcpServer::new();
//! let weights = server.call_tool("get_scoring_weights", serde_json::json!({})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not deserialize into the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool ran and returned an MCP error
    #[error("mcp error: {message}")]
    McpError {
        message: String,
        data: Option<Value>,
    },
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError {
            message: err.message.to_string(),
            data: err.data,
        }
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be invoked in-process.
///
/// Servers built on `#[tool_router]` implement this by returning
/// `tool_router.list_all()` and dispatching on the tool name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP configuration files
    fn server_name(&self) -> &str;

    fn list_tools(&self) -> Vec<Tool>;

    /// Run the tool `name` with a JSON object of arguments.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}
