use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use super::page_title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=page_title("Not found")/>
        <div class="hero">
            <h1>"404"</h1>
            <p class="subtitle">"Nothing lives at this address."</p>
            <A href="/" class="primary-button">"Back to ideas"</A>
        </div>
    }
}
