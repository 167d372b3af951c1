//! Toast stack rendered at the application root.

use leptos::*;

use crate::services::use_toasts;

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.level.css_class())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <span class="toast-icon">{toast.level.emoji()}</span>
                            <span class="toast-message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
