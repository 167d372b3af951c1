//! Creation dialogs.
//!
//! Each dialog validates its own fields and hands a typed payload to the
//! page through `on_submit`; the page performs the request.

use leptos::*;

use crate::services::use_api;
use crate::types::{AppError, AppResult, NewEntry, NewIdea, NewPrototype};

// =============================================================================
// Validation
// =============================================================================

fn required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(AppError::Validation(format!("{} is required", field)))
    } else {
        Ok(value.to_string())
    }
}

fn optional_url(field: &str, value: &str) -> AppResult<Option<String>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(Some(value.to_string()))
    } else {
        Err(AppError::Validation(format!("{} must start with http:// or https://", field)))
    }
}

/// Comma or whitespace separated tags, lowercased, without duplicates.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|t| t.trim().trim_start_matches('#').to_lowercase())
        .filter(|t| !t.is_empty())
    {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

pub fn validate_entry(title: &str, description: &str) -> AppResult<NewEntry> {
    Ok(NewEntry {
        title: required("Title", title)?,
        description: description.trim().to_string(),
    })
}

pub fn validate_idea(title: &str, description: &str, tags: &str) -> AppResult<NewIdea> {
    Ok(NewIdea {
        title: required("Title", title)?,
        description: required("Description", description)?,
        tags: parse_tags(tags),
    })
}

pub fn validate_prototype(
    title: &str,
    description: &str,
    repository_url: &str,
    demo_url: &str,
) -> AppResult<NewPrototype> {
    Ok(NewPrototype {
        title: required("Title", title)?,
        description: description.trim().to_string(),
        repository_url: optional_url("Repository URL", repository_url)?,
        demo_url: optional_url("Demo URL", demo_url)?,
    })
}

// =============================================================================
// Shared pieces
// =============================================================================

#[component]
fn DialogFrame(
    open: RwSignal<bool>,
    heading: &'static str,
    error: RwSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| open.set(false)></div>
        <div class="dialog" role="dialog" aria-label=heading>
            <div class="dialog-header">
                <h2>{heading}</h2>
                <button class="dialog-close" on:click=move |_| open.set(false)>"✕"</button>
            </div>
            {children()}
            <Show when=move || error.with(Option::is_some)>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}

/// "Suggest titles" button plus the returned candidates.
#[component]
pub fn TitleSuggestions(
    /// Free text the suggestions are generated from
    #[prop(into)]
    content: Signal<String>,
    #[prop(into)] on_pick: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let suggestions = create_rw_signal(Vec::<String>::new());
    let (loading, set_loading) = create_signal(false);

    let on_suggest = move |_| {
        let text = content.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = api.suggest_titles(&text).await;
            let _ = suggestions.try_set(result);
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <div class="title-suggestions">
            <button
                type="button"
                class="suggest-button"
                disabled=move || loading.get() || content.with(|c| c.trim().is_empty())
                on:click=on_suggest
            >
                {move || if loading.get() { "⏳ Thinking..." } else { "✨ Suggest titles" }}
            </button>
            <div class="suggestion-list">
                <For
                    each=move || suggestions.get()
                    key=|s| s.clone()
                    children=move |s| {
                        let picked = s.clone();
                        view! {
                            <button
                                type="button"
                                class="suggestion"
                                on:click=move |_| on_pick.call(picked.clone())
                            >
                                {s}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}

// =============================================================================
// Dialogs
// =============================================================================

#[component]
pub fn NewIdeaDialog(open: RwSignal<bool>, #[prop(into)] on_submit: Callback<NewIdea>) -> impl IntoView {
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let tags = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match validate_idea(&title.get_untracked(), &description.get_untracked(), &tags.get_untracked()) {
            Ok(idea) => {
                on_submit.call(idea);
                title.set(String::new());
                description.set(String::new());
                tags.set(String::new());
                error.set(None);
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <DialogFrame open=open heading="New idea" error=error>
            <form class="dialog-form" on:submit=submit>
                <label>"Title"</label>
                <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                <TitleSuggestions content=description on_pick=move |s| title.set(s)/>
                <label>"Description"</label>
                <textarea rows="5" prop:value=move || description.get() on:input=move |ev| description.set(event_target_value(&ev))></textarea>
                <label>"Tags"</label>
                <input type="text" placeholder="mobility, energy" prop:value=move || tags.get() on:input=move |ev| tags.set(event_target_value(&ev))/>
                <button type="submit" class="primary-button">"Publish idea"</button>
            </form>
        </DialogFrame>
    }
}

/// Dialog for sub-ideas and proposals, which share a title/description form.
#[component]
pub fn EntryDialog(
    open: RwSignal<bool>,
    heading: &'static str,
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<NewEntry>,
) -> impl IntoView {
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match validate_entry(&title.get_untracked(), &description.get_untracked()) {
            Ok(entry) => {
                on_submit.call(entry);
                title.set(String::new());
                description.set(String::new());
                error.set(None);
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <DialogFrame open=open heading=heading error=error>
            <form class="dialog-form" on:submit=submit>
                <label>"Title"</label>
                <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                <TitleSuggestions content=description on_pick=move |s| title.set(s)/>
                <label>"Description"</label>
                <textarea rows="5" prop:value=move || description.get() on:input=move |ev| description.set(event_target_value(&ev))></textarea>
                <button type="submit" class="primary-button">{submit_label}</button>
            </form>
        </DialogFrame>
    }
}

#[component]
pub fn PrototypeDialog(open: RwSignal<bool>, #[prop(into)] on_submit: Callback<NewPrototype>) -> impl IntoView {
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let repository_url = create_rw_signal(String::new());
    let demo_url = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_prototype(
            &title.get_untracked(),
            &description.get_untracked(),
            &repository_url.get_untracked(),
            &demo_url.get_untracked(),
        );
        match result {
            Ok(prototype) => {
                on_submit.call(prototype);
                for field in [title, description, repository_url, demo_url] {
                    field.set(String::new());
                }
                error.set(None);
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <DialogFrame open=open heading="Submit prototype" error=error>
            <form class="dialog-form" on:submit=submit>
                <label>"Title"</label>
                <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                <TitleSuggestions content=description on_pick=move |s| title.set(s)/>
                <label>"Description"</label>
                <textarea rows="4" prop:value=move || description.get() on:input=move |ev| description.set(event_target_value(&ev))></textarea>
                <label>"Repository URL"</label>
                <input type="url" prop:value=move || repository_url.get() on:input=move |ev| repository_url.set(event_target_value(&ev))/>
                <label>"Demo URL"</label>
                <input type="url" prop:value=move || demo_url.get() on:input=move |ev| demo_url.set(event_target_value(&ev))/>
                <button type="submit" class="primary-button">"Submit prototype"</button>
            </form>
        </DialogFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_requires_title() {
        let err = validate_entry("   ", "body").unwrap_err();
        assert_eq!(err, AppError::Validation("Title is required".into()));

        let entry = validate_entry("  Bike lanes ", " shared ").unwrap();
        assert_eq!(entry.title, "Bike lanes");
        assert_eq!(entry.description, "shared");
    }

    #[test]
    fn test_idea_requires_description() {
        assert!(validate_idea("Title", "", "").is_err());
        let idea = validate_idea("Title", "Body", "Mobility, #energy mobility").unwrap();
        assert_eq!(idea.tags, vec!["mobility", "energy"]);
    }

    #[test]
    fn test_prototype_urls() {
        let proto = validate_prototype("Board", "", "https://github.com/x/y", "").unwrap();
        assert_eq!(proto.repository_url.as_deref(), Some("https://github.com/x/y"));
        assert_eq!(proto.demo_url, None);

        let err = validate_prototype("Board", "", "github.com/x/y", "").unwrap_err();
        assert!(err.to_string().contains("Repository URL"));
    }

    #[test]
    fn test_parse_tags_ignores_empty() {
        assert!(parse_tags(" , ,, ").is_empty());
    }
}
