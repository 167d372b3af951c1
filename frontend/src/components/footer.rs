//! Footer component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>{APP_NAME} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="/hackathons" class="footer-link">"Hackathons"</a>
                <a href="/leaderboard" class="footer-link">"Leaderboard"</a>
                <a href="https://github.com/leptos-rs/leptos" class="footer-link" target="_blank">
                    "Leptos"
                </a>
            </div>
        </footer>
    }
}
