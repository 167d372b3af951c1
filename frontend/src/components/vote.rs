//! Vote widget.
//!
//! Thin Leptos binding over [`VoteController`]: the widget owns one
//! `RwSignal<VoteState>` and hands it to the controller through
//! [`SignalCell`].

use leptos::*;

use crate::services::use_api;
use crate::types::VoteSubject;
use crate::vote::{VoteCell, VoteController, VoteDirection, VoteState};

/// Publishes controller state into a signal.
///
/// Async continuations may outlive the widget, so reads and writes go
/// through the `try_` accessors and become no-ops once disposed.
#[derive(Clone, Copy)]
pub struct SignalCell(pub RwSignal<VoteState>);

impl VoteCell for SignalCell {
    fn get(&self) -> VoteState {
        self.0.try_get_untracked().unwrap_or_default()
    }

    fn set(&self, state: VoteState) {
        let _ = self.0.try_set(state);
    }
}

#[component]
pub fn VoteWidget(
    subject: VoteSubject,
    /// Tally shown while loading and when the fetch fails
    #[prop(default = 0)]
    initial_votes: i64,
) -> impl IntoView {
    let state = create_rw_signal(VoteState::new(initial_votes));
    let controller = VoteController::new(use_api(), subject, initial_votes);

    // Initial fetch on mount
    {
        let controller = controller.clone();
        spawn_local(async move {
            controller.initialize(&SignalCell(state)).await;
        });
    }

    let cast = move |direction: VoteDirection| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.cast(direction, &SignalCell(state)).await;
        });
    };
    let cast_down = cast.clone();

    view! {
        <div class="vote-widget" class:loading=move || state.with(|s| s.loading)>
            <button
                class="vote-button vote-up"
                class:active=move || state.with(VoteState::is_up_active)
                disabled=move || state.with(|s| s.loading)
                aria-label="Upvote"
                on:click=move |_| cast(VoteDirection::Up)
            >
                "▲"
            </button>
            <span class="vote-count">{move || state.with(|s| s.votes)}</span>
            <button
                class="vote-button vote-down"
                class:active=move || state.with(VoteState::is_down_active)
                disabled=move || state.with(|s| s.loading)
                aria-label="Downvote"
                on:click=move |_| cast_down(VoteDirection::Down)
            >
                "▼"
            </button>
        </div>
    }
}
