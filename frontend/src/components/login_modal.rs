use leptos::*;
use shared::LoginRequest;

use crate::api::use_api;
use crate::components::modal::Modal;
use crate::i18n::use_i18n;
use crate::session::use_auth;

#[component]
pub fn LoginModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let i18n = use_i18n();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let api = api.clone();
        let auth = auth.clone();
        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };

        loading.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match api.login(request.clone()).await {
                Ok(token) => auth.sign_in(&token, &request.email),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => on_close.call(()),
                Err(e) => {
                    tracing::warn!(%e, "login failed");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <Modal title=i18n.t("auth.login_title") on_close=on_close>
            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            <form on:submit=on_submit>
                <div class="form-group">
                    <label class="form-label" for="login-email">{i18n.t("auth.email")}</label>
                    <input
                        type="email"
                        id="login-email"
                        class="form-input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="login-password">{i18n.t("auth.password")}</label>
                    <input
                        type="password"
                        id="login-password"
                        class="form-input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        required
                    />
                </div>

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
