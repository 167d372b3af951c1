use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::{page_title, use_id_param, ErrorNotice, Loading};
use crate::components::{CommentThread, EntryDialog, ProposalCard, VoteWidget};
use crate::services::{use_api, use_toasts};
use crate::types::{NewEntry, VoteSubject};

/// A sub-idea with its proposals and comments.
#[component]
pub fn SubIdeaPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let id = use_id_param();

    let sub_idea = {
        let api = api.clone();
        create_local_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { api.sub_idea(&id).await }
            },
        )
    };
    let proposals = {
        let api = api.clone();
        create_local_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { api.proposals(&id).await }
            },
        )
    };

    let dialog_open = create_rw_signal(false);
    let on_create = Callback::new(move |entry: NewEntry| {
        let api = api.clone();
        let sub_idea_id = id.get_untracked();
        spawn_local(async move {
            match api.create_proposal(&sub_idea_id, &entry).await {
                Ok(created) => {
                    toasts.success(format!("Proposal \"{}\" submitted", created.title));
                    proposals.refetch();
                }
                Err(e) => toasts.error(format!("Could not submit proposal: {}", e)),
            }
        });
    });

    let detail = move || match sub_idea.get() {
        None => view! { <Loading/> }.into_view(),
        Some(Err(e)) => view! { <ErrorNotice error=e/> }.into_view(),
        Some(Ok(sub)) => {
            let back = format!("/ideas/{}", sub.idea_id);
            let subject = VoteSubject::sub_idea(sub.id.clone());
            view! {
                <Title text=page_title(&sub.title)/>
                <A href=back class="back-link">"← Back to idea"</A>
                <div class="detail-header votable-card">
                    <VoteWidget subject=subject/>
                    <div class="card-content">
                        <h1>{sub.title}</h1>
                        <p class="detail-body">{sub.description}</p>
                        <div class="byline">"by " {sub.author.name}</div>
                    </div>
                </div>
            }
            .into_view()
        }
    };

    view! {
        {detail}

        <section class="section">
            <div class="section-header">
                <h2>"Proposals"</h2>
                <button class="primary-button" on:click=move |_| dialog_open.set(true)>
                    "+ Propose solution"
                </button>
            </div>
            {move || match proposals.get() {
                None => view! { <Loading/> }.into_view(),
                Some(Err(e)) => {
                    log::warn!("Proposals unavailable: {}", e);
                    view! { <p class="empty">"Proposals are unavailable right now."</p> }.into_view()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="empty">"No proposals yet."</p> }.into_view()
                }
                Some(Ok(_)) => view! {
                    <div class="card-list">
                        <For
                            each=move || proposals.get().and_then(Result::ok).unwrap_or_default()
                            key=|p| p.id.clone()
                            children=|proposal| view! { <ProposalCard proposal=proposal/> }
                        />
                    </div>
                }
                .into_view(),
            }}
        </section>

        {move || view! { <CommentThread subject_id=id.get()/> }}

        <Show when=move || dialog_open.get()>
            <EntryDialog
                open=dialog_open
                heading="Propose solution"
                submit_label="Propose"
                on_submit=on_create
            />
        </Show>
    }
}
