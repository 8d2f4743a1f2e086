//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes classification, dry-run extraction and locale sync to AI coding
//! agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool handlers and the stdio entry point
//! - `types`: Parameter and result DTOs

mod server;
pub mod types;

pub use server::{HarvestMcpServer, run_server};
