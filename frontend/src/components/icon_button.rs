use leptos::*;

/// Icon-only button. `aria_label` names it for screen readers.
#[component]
pub fn IconButton(
    #[prop(into)] aria_label: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let full_class = match class {
        Some(extra) => format!("btn btn-icon {}", extra),
        None => "btn btn-icon".to_string(),
    };

    view! {
        <button
            type="button"
            class=full_class
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
            <path fill="currentColor" d="M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"></path>
        </svg>
    }
}
