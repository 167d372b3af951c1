//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the ideation backend.

pub mod server;
pub mod types;

pub use server::{build_router, start_server, AppState};
pub use types::*;
