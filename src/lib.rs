//! Locx - translatable text extraction for game data bundles
//!
//! Locx takes RPG-Maker-style game data (single JSON files or ZIP archives
//! with `data/` directories), walks every JSON document and collects the
//! strings worth translating, then serves them as a file tree, per-file
//! listings and CSV exports.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (classify, walk, resolve, tree, CSV)
//! - `logging`: tracing subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `service`: Session-scoped façade used by the front ends
//! - `session`: In-memory session store
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod service;
pub mod session;
pub mod utils;
