use chrono::Utc;
use leptos::*;
use leptos_meta::Title;

use super::page_title;
use crate::mock::hackathons;

#[component]
pub fn HackathonsPage() -> impl IntoView {
    let today = Utc::now().date_naive();

    view! {
        <Title text=page_title("Hackathons")/>
        <section class="section">
            <div class="section-header">
                <h2>"Hackathons"</h2>
            </div>
            <div class="card-grid">
                {hackathons()
                    .into_iter()
                    .map(|hack| {
                        let status = hack.status(today);
                        view! {
                            <article class="card hackathon-card">
                                <span class=format!("status-badge {}", status.css_class())>
                                    {status.label()}
                                </span>
                                <h3 class="card-title">{hack.title}</h3>
                                <p class="card-body">{hack.summary}</p>
                                <dl class="hackathon-facts">
                                    <dt>"Where"</dt>
                                    <dd>{hack.location}</dd>
                                    <dt>"When"</dt>
                                    <dd>{hack.starts_on} " → " {hack.ends_on}</dd>
                                    <dt>"Prize"</dt>
                                    <dd>{hack.prize}</dd>
                                    <dt>"Participants"</dt>
                                    <dd>{hack.participants}</dd>
                                </dl>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
