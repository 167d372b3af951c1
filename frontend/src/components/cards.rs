//! Content cards used by the list pages.

use chrono::{DateTime, Utc};
use leptos::*;
use leptos_router::A;

use super::VoteWidget;
use crate::types::{time_ago, Author, Idea, Proposal, Prototype, SubIdea, VoteSubject};

#[component]
fn Byline(author: Author, created_at: DateTime<Utc>) -> impl IntoView {
    view! {
        <div class="byline">
            <span class="byline-author">{author.name}</span>
            " • "
            <time datetime=created_at.to_rfc3339()>{time_ago(created_at, Utc::now())}</time>
        </div>
    }
}

#[component]
pub fn IdeaCard(idea: Idea) -> impl IntoView {
    let href = format!("/ideas/{}", idea.id);
    view! {
        <article class="card idea-card">
            <A href=href class="card-title">{idea.title}</A>
            <p class="card-body">{idea.description}</p>
            <div class="tags">
                {idea
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">"#" {tag}</span> })
                    .collect_view()}
            </div>
            <Byline author=idea.author created_at=idea.created_at/>
        </article>
    }
}

#[component]
pub fn SubIdeaCard(sub_idea: SubIdea) -> impl IntoView {
    let href = format!("/subideas/{}", sub_idea.id);
    let subject = VoteSubject::sub_idea(sub_idea.id.clone());
    view! {
        <article class="card votable-card">
            <VoteWidget subject=subject/>
            <div class="card-content">
                <A href=href class="card-title">{sub_idea.title}</A>
                <p class="card-body">{sub_idea.description}</p>
                <Byline author=sub_idea.author created_at=sub_idea.created_at/>
            </div>
        </article>
    }
}

#[component]
pub fn ProposalCard(proposal: Proposal) -> impl IntoView {
    let href = format!("/proposals/{}", proposal.id);
    view! {
        <article class="card proposal-card">
            <A href=href class="card-title">{proposal.title}</A>
            <p class="card-body">{proposal.description}</p>
            <Byline author=proposal.author created_at=proposal.created_at/>
        </article>
    }
}

#[component]
pub fn PrototypeCard(prototype: Prototype) -> impl IntoView {
    let subject = VoteSubject::prototype(prototype.id.clone());
    let links = [
        ("Repository", prototype.repository_url),
        ("Live demo", prototype.demo_url),
    ];

    view! {
        <article class="card votable-card">
            <VoteWidget subject=subject/>
            <div class="card-content">
                <h3 class="card-title">{prototype.title}</h3>
                <p class="card-body">{prototype.description}</p>
                <div class="card-links">
                    {links
                        .into_iter()
                        .filter_map(|(label, url)| {
                            url.map(|url| {
                                view! {
                                    <a href=url class="card-link" target="_blank" rel="noopener">
                                        {label}
                                    </a>
                                }
                            })
                        })
                        .collect_view()}
                </div>
                <Byline author=prototype.author created_at=prototype.created_at/>
            </div>
        </article>
    }
}
