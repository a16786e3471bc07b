use leptos::*;

use crate::i18n::use_i18n;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`; clicks inside the dialog do not.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_label = use_i18n().t("common.close");
    let close = move |_| on_close.call(());
    let dialog_class = match class {
        Some(extra) => format!("modal {}", extra),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-backdrop" on:click=close>
            <div
                class=dialog_class
                role="dialog"
                aria-modal="true"
                on:click=|e| e.stop_propagation()
            >
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" aria-label=close_label on:click=close>"×"</button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
