//! Ideation Portal - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend where the community shares ideas, breaks them into
//! sub-ideas, proposes solutions, ships prototypes and votes on them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (ApiClient, AuthContext, ToastContext, meta)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, current user)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /                HomePage (hero, icon cloud, ideas)     │
//! │  ├── /ideas/:id       IdeaPage (sub-ideas + votes)           │
//! │  ├── /subideas/:id    SubIdeaPage (proposals, comments)      │
//! │  ├── /proposals/:id   ProposalPage (prototypes + votes)      │
//! │  ├── /hackathons      HackathonsPage                         │
//! │  └── /leaderboard     LeaderboardPage                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, Toasts                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire and view types, errors
//! - [`vote`] - Optimistic vote state machine and controller
//! - [`cloud`] - Icon cloud geometry
//! - [`services`] - REST client and application contexts
//! - [`components`] - UI components
//! - [`pages`] - Routed pages
//! - [`mock`] - Static hackathon and leaderboard data

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod vote;
pub mod cloud;
pub mod mock;
pub mod services;
pub mod components;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Content
    Comment, Idea, Proposal, Prototype, SubIdea, User,
    // Votes
    VoteSubject, VoteSubjectKind, VoteSummary,
    // Errors
    AppError, AppResult,
};

pub use vote::{VoteController, VoteDirection, VoteState};

use components::{Footer, Header, Toasts};
use pages::{
    HackathonsPage, HomePage, IdeaPage, LeaderboardPage, NotFoundPage, ProposalPage, SubIdeaPage,
};

// =============================================================================
// Application root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = services::provide_api(BACKEND_URL);
    services::provide_auth_context(api);
    services::provide_toast_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/ideas/:id" view=IdeaPage/>
                    <Route path="/subideas/:id" view=SubIdeaPage/>
                    <Route path="/proposals/:id" view=ProposalPage/>
                    <Route path="/hackathons" view=HackathonsPage/>
                    <Route path="/leaderboard" view=LeaderboardPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </main>
            <Footer/>
            <Toasts/>
        </Router>
    }
}
