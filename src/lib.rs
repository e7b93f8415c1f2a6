//! MCP server for chart tools.
//!
//! Exposes `create-chart`, `analyze-data`, `export-chart`, and `update-chart`
//! tools over JSON-RPC 2.0 stdio transport, compatible with any MCP-aware AI agent.
//!
//! Handlers are stubs: each call returns a text description of its inputs.
//! Arguments are still validated against each tool's declared JSON Schema
//! before a handler runs.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod server;

pub mod schema;
