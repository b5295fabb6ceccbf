//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and the `serve_stdio!` entry-point macro
//! - **Results**: [`json_success`] for structured tool responses
//! - **Errors**: [`invalid_params_with`] / [`internal_error`]
//! - **Embeddable**: [`EmbeddableMcp`] for calling a server's tools in-process
//!
//! ```rust,ignore
//! use mcp_common::json_success;
//!
//! mcp_common::serve_stdio!(MyServer, "my_mcp");
//!
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     json_success(&compute())
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params_with};
pub use init::init_tracing;
pub use result::{json_success, text_of};

pub use rmcp::{
    model::{CallToolResult, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
