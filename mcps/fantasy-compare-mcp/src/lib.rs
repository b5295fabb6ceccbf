//! Fantasy Compare MCP Library
//!
//! Head-to-head fantasy basketball comparison. Two per-game stat lines go in;
//! fantasy scores, category winners and chart-ready dashboard data come out.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use fantasy_compare_mcp::fantasy::{compare, ScoringWeights};
//!
//! let data = compare(&player1, &player2, "2024-25", &ScoringWeights::default())?;
//! println!("{:?} wins by {}", data.winner.name, data.winner.margin);
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `fantasy-compare-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "fantasy": { "command": "./fantasy-compare-mcp" } } }
//! ```

pub mod config;
pub mod fantasy;
pub mod handlers;
pub mod params;
pub mod server;

pub use config::Config;
pub use server::FantasyCompareMcpServer;

pub use params::*;

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
