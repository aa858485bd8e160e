//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes extraction sessions to AI assistants over stdio. Sessions live as
//! long as the server process.
//!
//! ## Module Structure
//!
//! - `server`: Tool implementations and the stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{LocxMcpServer, run_server};
