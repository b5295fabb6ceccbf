//! MCP error constructors used by tool handlers

use rmcp::ErrorData as McpError;
use serde_json::Value;

/// Internal failure on the server side (serialization, invariants).
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// The caller sent arguments the tool cannot use. `data` is a
/// machine-readable payload so the caller can locate each offending argument.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::invalid_params_with;
///
/// return Err(invalid_params_with(
///     "player2.bpg is missing",
///     serde_json::json!([{ "record": "player2", "field": "bpg" }]),
/// ));
/// ```
pub fn invalid_params_with(message: impl Into<String>, data: Value) -> McpError {
    McpError::invalid_params(message.into(), Some(data))
}
