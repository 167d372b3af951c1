//! Current-user context.
//!
//! Created once at the application root; the profile is fetched right after
//! mount and the signals are released with the root scope on unmount.

use leptos::*;

use super::api::ApiClient;
use crate::types::User;

#[derive(Clone, Copy)]
pub struct AuthContext {
    /// `None` for guests or while loading
    pub user: RwSignal<Option<User>>,
    /// True once the profile request settled
    pub loaded: RwSignal<bool>,
}

impl AuthContext {
    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Display name, "Guest" when signed out.
    pub fn display_name(&self) -> String {
        self.user
            .with(|u| u.as_ref().map(|u| u.name.clone()))
            .unwrap_or_else(|| "Guest".to_string())
    }
}

/// Provide the auth context and start loading the profile.
pub fn provide_auth_context(api: ApiClient) -> AuthContext {
    let ctx = AuthContext {
        user: create_rw_signal(None),
        loaded: create_rw_signal(false),
    };
    provide_context(ctx);

    spawn_local(async move {
        match api.me().await {
            Ok(user) => {
                log::info!("👤 Signed in as {}", user.name);
                let _ = ctx.user.try_set(Some(user));
            }
            Err(e) => {
                log::warn!("Profile unavailable, continuing as guest: {}", e);
            }
        }
        let _ = ctx.loaded.try_set(true);
    });

    ctx
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
