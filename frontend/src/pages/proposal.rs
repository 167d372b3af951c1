use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::{page_title, use_id_param, ErrorNotice, Loading};
use crate::components::{CommentThread, PrototypeCard, PrototypeDialog};
use crate::services::{use_api, use_toasts};
use crate::types::NewPrototype;

/// A proposal with its prototypes and comments.
#[component]
pub fn ProposalPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let id = use_id_param();

    let proposal = {
        let api = api.clone();
        create_local_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { api.proposal(&id).await }
            },
        )
    };
    let prototypes = {
        let api = api.clone();
        create_local_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { api.prototypes(&id).await }
            },
        )
    };

    let dialog_open = create_rw_signal(false);
    let on_create = Callback::new(move |prototype: NewPrototype| {
        let api = api.clone();
        let proposal_id = id.get_untracked();
        spawn_local(async move {
            match api.create_prototype(&proposal_id, &prototype).await {
                Ok(created) => {
                    toasts.success(format!("Prototype \"{}\" submitted", created.title));
                    prototypes.refetch();
                }
                Err(e) => toasts.error(format!("Could not submit prototype: {}", e)),
            }
        });
    });

    view! {
        {move || match proposal.get() {
            None => view! { <Loading/> }.into_view(),
            Some(Err(e)) => view! { <ErrorNotice error=e/> }.into_view(),
            Some(Ok(proposal)) => {
                let back = format!("/subideas/{}", proposal.sub_idea_id);
                view! {
                    <Title text=page_title(&proposal.title)/>
                    <A href=back class="back-link">"← Back to sub-idea"</A>
                    <div class="detail-header">
                        <h1>{proposal.title}</h1>
                        <p class="detail-body">{proposal.description}</p>
                        <div class="byline">"by " {proposal.author.name}</div>
                    </div>
                }
                .into_view()
            }
        }}

        <section class="section">
            <div class="section-header">
                <h2>"Prototypes"</h2>
                <button class="primary-button" on:click=move |_| dialog_open.set(true)>
                    "+ Submit prototype"
                </button>
            </div>
            {move || match prototypes.get() {
                None => view! { <Loading/> }.into_view(),
                Some(Err(e)) => {
                    log::warn!("Prototypes unavailable: {}", e);
                    view! { <p class="empty">"Prototypes are unavailable right now."</p> }.into_view()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="empty">"No prototypes yet. Build the first one!"</p> }.into_view()
                }
                Some(Ok(_)) => view! {
                    <div class="card-list">
                        <For
                            each=move || prototypes.get().and_then(Result::ok).unwrap_or_default()
                            key=|p| p.id.clone()
                            children=|prototype| view! { <PrototypeCard prototype=prototype/> }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>

        {move || view! { <CommentThread subject_id=id.get()/> }}

        <Show when=move || dialog_open.get()>
            <PrototypeDialog open=dialog_open on_submit=on_create/>
        </Show>
    }
}
