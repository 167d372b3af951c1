//! Backend communication and application-wide contexts.
//!
//! # Services
//!
//! - [`api`] - REST client for the ideation backend
//! - [`auth`] - Current user, fetched once at startup
//! - [`toast`] - Transient notifications
//!
//! Contexts are created in [`crate::App`] and read with the `use_*` helpers.

pub mod api;
pub mod auth;
pub mod toast;

pub use api::*;
pub use auth::*;
pub use toast::*;

use leptos::*;

/// Provide the shared [`ApiClient`].
pub fn provide_api(base_url: &str) -> ApiClient {
    let api = ApiClient::new(base_url);
    provide_context(api.clone());
    api
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
