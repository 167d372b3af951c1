use leptos::*;
use leptos_meta::Title;

use super::{page_title, ErrorNotice, Loading};
use crate::components::{Hero, IdeaCard, NewIdeaDialog};
use crate::services::{use_api, use_auth, use_toasts};
use crate::types::NewIdea;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toasts();

    let ideas = {
        let api = api.clone();
        create_local_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { api.ideas().await }
            },
        )
    };

    let dialog_open = create_rw_signal(false);
    let on_create = Callback::new(move |idea: NewIdea| {
        let api = api.clone();
        spawn_local(async move {
            match api.create_idea(&idea).await {
                Ok(created) => {
                    toasts.success(format!("Idea \"{}\" published", created.title));
                    ideas.refetch();
                }
                Err(e) => toasts.error(format!("Could not publish idea: {}", e)),
            }
        });
    });

    view! {
        <Title text=page_title("Ideas")/>
        <Hero/>

        <section class="section">
            <div class="section-header">
                <h2>"Ideas"</h2>
                <button
                    class="primary-button"
                    disabled=move || !auth.is_signed_in()
                    on:click=move |_| dialog_open.set(true)
                >
                    "+ New idea"
                </button>
            </div>

            {move || match ideas.get() {
                None => view! { <Loading/> }.into_view(),
                Some(Err(e)) => view! { <ErrorNotice error=e/> }.into_view(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="empty">"No ideas yet. Be the first!"</p> }.into_view()
                }
                Some(Ok(_)) => view! {
                    <div class="card-grid">
                        <For
                            each=move || ideas.get().and_then(Result::ok).unwrap_or_default()
                            key=|idea| idea.id.clone()
                            children=|idea| view! { <IdeaCard idea=idea/> }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>

        <Show when=move || dialog_open.get()>
            <NewIdeaDialog open=dialog_open on_submit=on_create/>
        </Show>
    }
}
