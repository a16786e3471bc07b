use leptos::*;
use shared::OrderRequest;

use crate::api::use_api;
use crate::cart::{use_cart, CartAction};
use crate::i18n::use_i18n;
use crate::session::use_auth;

/// Cart contents with per-line removal and checkout.
#[component]
pub fn CartOverlay() -> impl IntoView {
    let cart = use_cart();
    let api = use_api();
    let auth = use_auth();
    let i18n = use_i18n();

    let submitting = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);

    let on_check_out = move |_| {
        let Some(email) = auth.email() else {
            error.set(Some(i18n.t("cart.order_failed")));
            return;
        };
        let request = OrderRequest {
            email,
            order_data: cart.items(),
            order_date: chrono::Utc::now().to_rfc2822(),
        };
        let api = api.clone();

        submitting.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match api.place_order(request).await {
                Ok(()) => {
                    tracing::info!("order placed");
                    cart.dispatch(CartAction::Drop);
                }
                Err(e) => {
                    tracing::warn!(%e, "checkout failed");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || !cart.is_empty()
            fallback=move || view! { <div class="cart-empty">{i18n.t("cart.empty")}</div> }
        >
            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}
            <table class="table cart-table">
                <thead>
                    <tr>
                        <th scope="col">"#"</th>
                        <th scope="col">{i18n.t("cart.name")}</th>
                        <th scope="col">{i18n.t("cart.quantity")}</th>
                        <th scope="col">{i18n.t("cart.option")}</th>
                        <th scope="col">{i18n.t("cart.amount")}</th>
                        <th scope="col"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        cart.items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, line)| view! {
                                <tr>
                                    <th scope="row">{index + 1}</th>
                                    <td>{line.name}</td>
                                    <td>{line.qty}</td>
                                    <td>{line.size}</td>
                                    <td>{line.price}</td>
                                    <td>
                                        <button
                                            type="button"
                                            class="btn btn-sm text-danger"
                                            title=i18n.t("cart.remove")
                                            on:click=move |_| cart.dispatch(CartAction::Remove(index))
                                        >
                                            "✕"
                                        </button>
                                    </td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="cart-footer">
                <h4 class="cart-total">
                    {i18n.t("cart.total")} ": " {move || cart.total_price()}
                </h4>
                <button
                    type="button"
                    class="btn bg-success text-white"
                    disabled=move || submitting.get()
                    on:click=on_check_out.clone()
                >
                    {i18n.t("cart.check_out")}
                </button>
            </div>
        </Show>
    }
}
