//! Comment thread attached to a sub-idea or proposal.

use chrono::Utc;
use leptos::*;

use crate::services::{use_api, use_auth, use_toasts};
use crate::types::{time_ago, Comment};

#[component]
pub fn CommentThread(subject_id: String) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toasts();

    let comments = create_rw_signal(Vec::<Comment>::new());
    let (loading, set_loading) = create_signal(true);
    let draft = create_rw_signal(String::new());
    let (posting, set_posting) = create_signal(false);

    {
        let api = api.clone();
        let subject_id = subject_id.clone();
        spawn_local(async move {
            match api.comments(&subject_id).await {
                Ok(list) => {
                    let _ = comments.try_set(list);
                }
                Err(e) => log::warn!("Could not load comments for {}: {}", subject_id, e),
            }
            let _ = set_loading.try_set(false);
        });
    }

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get_untracked();
        if body.trim().is_empty() || posting.get_untracked() {
            return;
        }

        let api = api.clone();
        let subject_id = subject_id.clone();
        set_posting.set(true);
        spawn_local(async move {
            match api.create_comment(&subject_id, &body).await {
                Ok(comment) => {
                    let _ = comments.try_update(|list| list.push(comment));
                    let _ = draft.try_set(String::new());
                }
                Err(e) => toasts.error(format!("Comment not posted: {}", e)),
            }
            let _ = set_posting.try_set(false);
        });
    };

    view! {
        <section class="comments">
            <h3>"Comments " <span class="count">{move || comments.with(Vec::len)}</span></h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="skeleton">"Loading comments..."</div> }
            >
                <Show
                    when=move || comments.with(|c| !c.is_empty())
                    fallback=|| view! { <p class="empty">"No comments yet."</p> }
                >
                    <ul class="comment-list">
                        <For
                            each=move || comments.get()
                            key=|c| c.id.clone()
                            children=|comment| {
                                view! {
                                    <li class="comment">
                                        <div class="byline">
                                            <span class="byline-author">{comment.author.name}</span>
                                            " • "
                                            {time_ago(comment.created_at, Utc::now())}
                                        </div>
                                        <p>{comment.body}</p>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            <form class="comment-form" on:submit=submit>
                <textarea
                    rows="3"
                    placeholder=move || format!("Comment as {}", auth.display_name())
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="primary-button" disabled=move || posting.get()>
                    "Post"
                </button>
            </form>
        </section>
    }
}
