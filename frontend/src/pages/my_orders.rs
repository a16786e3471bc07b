use leptos::*;
use shared::Order;

use crate::api::use_api;
use crate::error::ClientError;
use crate::i18n::use_i18n;
use crate::session::use_auth;

/// Result of one load: `None` when nobody is signed in.
type OrdersLoad = Result<Option<Vec<Order>>, ClientError>;

/// Newest order first.
pub(crate) fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.reverse();
    orders
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum OrdersView {
    Loading,
    SignIn,
    Failed(String),
    Empty,
    Orders(Vec<Order>),
}

impl OrdersView {
    pub(crate) fn from_load(load: Option<OrdersLoad>) -> Self {
        match load {
            None => OrdersView::Loading,
            Some(Err(e)) => OrdersView::Failed(e.to_string()),
            Some(Ok(None)) => OrdersView::SignIn,
            Some(Ok(Some(orders))) if orders.is_empty() => OrdersView::Empty,
            Some(Ok(Some(orders))) => OrdersView::Orders(orders),
        }
    }
}

#[component]
pub fn MyOrders() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let i18n = use_i18n();

    // Keyed on the signed-in email, so logging in from this page reloads it.
    let orders = create_local_resource(
        move || auth.email(),
        move |email| {
            let api = api.clone();
            async move {
                let Some(email) = email else {
                    return Ok(None);
                };
                match api.my_orders(&email).await {
                    Ok(list) => Ok(Some(newest_first(list))),
                    Err(e) => {
                        tracing::warn!(%e, "could not load orders");
                        Err(e)
                    }
                }
            }
        },
    );

    let render_order = move |order: Order| {
        view! {
            <section class="order">
                <h4 class="order-date">
                    {i18n.t("orders.placed_on")} " " {order.order_date}
                </h4>
                <hr />
                <div class="order-lines">
                    {order.items
                        .into_iter()
                        .map(|line| view! {
                            <div class="card order-line">
                                <img src=line.img class="card-img-top" alt=line.name.clone() />
                                <div class="card-body">
                                    <h5 class="card-title">{line.name}</h5>
                                    <span class="badge">{line.qty}</span>
                                    <span class="badge">{line.size}</span>
                                    <span class="order-line-price">{line.price}</span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        }
    };

    view! {
        <div class="container">
            <h2 class="page-title">{i18n.t("orders.title")}</h2>
            {move || {
                let state = if orders.loading().get() {
                    OrdersView::Loading
                } else {
                    OrdersView::from_load(orders.get())
                };
                match state {
                    OrdersView::Loading => {
                        view! { <p class="loading">{i18n.t("common.loading")}</p> }.into_view()
                    }
                    OrdersView::SignIn => {
                        view! { <p class="empty-state">{i18n.t("orders.sign_in")}</p> }.into_view()
                    }
                    OrdersView::Failed(e) => {
                        view! { <div class="alert alert-error">{e}</div> }.into_view()
                    }
                    OrdersView::Empty => {
                        view! { <p class="empty-state">{i18n.t("orders.empty")}</p> }.into_view()
                    }
                    OrdersView::Orders(list) => {
                        list.into_iter().map(render_order).collect_view()
                    }
                }
            }}
        </div>
    }
}
