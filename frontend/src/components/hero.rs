//! Hero section component

use leptos::*;

use super::IconSphere;

const TECH_ICONS: [&str; 14] = [
    "🦀", "⚛️", "🐍", "🐳", "☕", "🐘", "🔥", "🌐", "📱", "🤖", "🔒", "📊", "☁️", "⚙️",
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-text">
                <h1>"Ideas become prototypes"</h1>
                <p class="subtitle">
                    "Share a challenge, break it into sub-ideas, propose solutions and ship prototypes. "
                    "The community votes on what moves forward."
                </p>
            </div>
            <IconSphere icons=TECH_ICONS.to_vec()/>
        </div>
    }
}
