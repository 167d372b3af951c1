use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;
use crate::services::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();

    let user_badge = move || {
        if !auth.loaded.get() {
            return view! { <span class="user-badge loading">"…"</span> }.into_view();
        }

        match auth.user.get() {
            Some(user) => {
                let avatar = match user.avatar_url.clone() {
                    Some(url) => view! { <img class="avatar" src=url alt=user.name.clone()/> }.into_view(),
                    None => view! { <span class="avatar">{user.initials()}</span> }.into_view(),
                };
                view! {
                    <div class="user-badge" title=user.email.clone()>
                        {avatar}
                        <span class="user-name">{user.name.clone()}</span>
                    </div>
                }
                .into_view()
            }
            None => view! { <span class="user-badge guest">{auth.display_name()}</span> }.into_view(),
        }
    };

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
                <nav class="nav">
                    <A href="/" exact=true active_class="active">"Ideas"</A>
                    <A href="/hackathons" active_class="active">"Hackathons"</A>
                    <A href="/leaderboard" active_class="active">"Leaderboard"</A>
                </nav>
            </div>
            <div class="header-right">
                {user_badge}
            </div>
        </header>
    }
}
