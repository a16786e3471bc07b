use leptos::*;
use shared::CreateUserRequest;

use crate::api::use_api;
use crate::components::modal::Modal;
use crate::i18n::use_i18n;
use crate::session::use_auth;

#[component]
pub fn SignupModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let i18n = use_i18n();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let api = api.clone();
        let auth = auth.clone();
        let request = CreateUserRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            location: location.get(),
        };

        loading.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match api.create_user(request.clone()).await {
                Ok(Some(token)) => auth.sign_in(&token, &request.email),
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => on_close.call(()),
                Err(e) => {
                    tracing::warn!(%e, "signup failed");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label class="form-label" for=id>{i18n.t(label)}</label>
                <input
                    type=kind
                    id=id
                    class="form-input"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    required
                />
            </div>
        }
    };

    view! {
        <Modal title=i18n.t("auth.signup_title") on_close=on_close>
            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            <form on:submit=on_submit>
                {field("signup-name", "auth.name", "text", name)}
                {field("signup-email", "auth.email", "email", email)}
                {field("signup-password", "auth.password", "password", password)}
                {field("signup-location", "auth.location", "text", location)}

                <button
                    type="submit"
                    class="btn bg-success text-white"
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { i18n.t("auth.submitting") } else { i18n.t("auth.submit") }}
                </button>
            </form>
        </Modal>
    }
}
