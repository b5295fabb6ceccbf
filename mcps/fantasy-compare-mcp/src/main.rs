//! Fantasy Compare MCP - head-to-head fantasy basketball comparison over stdio

use fantasy_compare_mcp::FantasyCompareMcpServer;

mcp_common::serve_stdio!(FantasyCompareMcpServer, "fantasy_compare_mcp");
