use leptos::*;
use leptos_meta::Title;

use super::{page_title, use_id_param, ErrorNotice, Loading};
use crate::components::{EntryDialog, SubIdeaCard};
use crate::services::{use_api, use_toasts};
use crate::types::NewEntry;

/// An idea with its community sub-ideas.
#[component]
pub fn IdeaPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let id = use_id_param();

    let idea = {
        let api = api.clone();
        create_local_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { api.idea(&id).await }
            },
        )
    };
    let sub_ideas = {
        let api = api.clone();
        create_local_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { api.sub_ideas(&id).await }
            },
        )
    };

    let dialog_open = create_rw_signal(false);
    let on_create = Callback::new(move |entry: NewEntry| {
        let api = api.clone();
        let idea_id = id.get_untracked();
        spawn_local(async move {
            match api.create_sub_idea(&idea_id, &entry).await {
                Ok(created) => {
                    toasts.success(format!("Sub-idea \"{}\" submitted", created.title));
                    sub_ideas.refetch();
                }
                Err(e) => toasts.error(format!("Could not submit sub-idea: {}", e)),
            }
        });
    });

    view! {
        {move || match idea.get() {
            None => view! { <Loading/> }.into_view(),
            Some(Err(e)) => view! { <ErrorNotice error=e/> }.into_view(),
            Some(Ok(idea)) => view! {
                <Title text=page_title(&idea.title)/>
                <div class="detail-header">
                    <h1>{idea.title}</h1>
                    <p class="detail-body">{idea.description}</p>
                    <div class="byline">"by " {idea.author.name}</div>
                </div>
            }
            .into_view(),
        }}

        <section class="section">
            <div class="section-header">
                <h2>"Sub-ideas"</h2>
                <button class="primary-button" on:click=move |_| dialog_open.set(true)>
                    "+ Submit sub-idea"
                </button>
            </div>
            {move || match sub_ideas.get() {
                None => view! { <Loading/> }.into_view(),
                Some(Err(e)) => {
                    log::warn!("Sub-ideas unavailable: {}", e);
                    view! { <p class="empty">"Sub-ideas are unavailable right now."</p> }.into_view()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="empty">"No sub-ideas yet."</p> }.into_view()
                }
                Some(Ok(_)) => view! {
                    <div class="card-list">
                        <For
                            each=move || sub_ideas.get().and_then(Result::ok).unwrap_or_default()
                            key=|s| s.id.clone()
                            children=|sub_idea| view! { <SubIdeaCard sub_idea=sub_idea/> }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>

        <Show when=move || dialog_open.get()>
            <EntryDialog
                open=dialog_open
                heading="Submit sub-idea"
                submit_label="Submit"
                on_submit=on_create
            />
        </Show>
    }
}
