//! # Ideation - development backend for the ideation portal
//!
//! Serves the REST contracts the Leptos frontend consumes: ideas, sub-ideas,
//! proposals, prototypes, comments, votes, the current profile, and AI title
//! suggestions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Frontend   │────▶│  axum API   │────▶│   Store     │
//! │  (Leptos)   │     │  (handlers) │     │  (RwLock)   │
//! └─────────────┘     └──────┬──────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  AI client  │
//!                     │ (Anthropic) │
//!                     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Domain models (Idea, SubIdea, Proposal, Prototype, votes)
//! - [`store`] - In-memory content and vote store
//! - [`ai`] - Title suggestions
//! - [`config`] - Server configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Storage
pub mod store;

// AI
pub mod ai;

// Configuration
pub mod config;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{AiError, ServerError, StoreError};

pub use models::{
    Author, Comment, Idea, Prototype, Proposal, SubIdea, User, VoteCounts, VoteSubjectKind,
    VoteSummary, VoteValue,
};

pub use store::{SeedData, Store};

pub use ai::{suggest_titles_or_empty, AiClient};

pub use config::ServerConfig;

pub use api::types::{TitleSuggestionRequest, TitleSuggestionResponse, VoteAck, VoteRequest};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server};
}
