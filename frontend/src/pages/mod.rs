//! Routed pages.
//!
//! | Path               | Page               |
//! |--------------------|--------------------|
//! | `/`                | [`HomePage`]       |
//! | `/ideas/:id`       | [`IdeaPage`]       |
//! | `/subideas/:id`    | [`SubIdeaPage`]    |
//! | `/proposals/:id`   | [`ProposalPage`]   |
//! | `/hackathons`      | [`HackathonsPage`] |
//! | `/leaderboard`     | [`LeaderboardPage`]|

mod home;
mod idea;
mod sub_idea;
mod proposal;
mod hackathons;
mod leaderboard;
mod not_found;

pub use home::*;
pub use idea::*;
pub use sub_idea::*;
pub use proposal::*;
pub use hackathons::*;
pub use leaderboard::*;
pub use not_found::*;

use leptos::*;
use leptos_router::use_params_map;

use crate::config::APP_NAME;
use crate::types::AppError;

/// Document title for a page.
pub(crate) fn page_title(name: &str) -> String {
    format!("{} | {}", name, APP_NAME)
}

/// The `:id` route parameter (tracked).
pub(crate) fn use_id_param() -> Memo<String> {
    let params = use_params_map();
    create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()))
}

#[component]
pub fn Loading(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! { <div class="skeleton">{label}</div> }
}

#[component]
pub fn ErrorNotice(error: AppError) -> impl IntoView {
    let message = match &error {
        AppError::Server { status: 404, .. } => "This item does not exist or was removed.".to_string(),
        other => other.to_string(),
    };
    view! {
        <div class="error-notice">
            <span>"⚠️ "</span>
            {message}
        </div>
    }
}
