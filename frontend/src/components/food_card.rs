use leptos::*;
use shared::{CartItem, FoodItem};

use crate::cart::{use_cart, CartAction};
use crate::i18n::use_i18n;

const MAX_QUANTITY: u32 = 6;

pub(crate) fn line_price(unit_price: u32, qty: u32) -> u32 {
    unit_price.saturating_mul(qty)
}

/// Menu entry with quantity and size pickers.
#[component]
pub fn FoodCard(item: FoodItem) -> impl IntoView {
    let cart = use_cart();
    let i18n = use_i18n();

    let sizes = item.size_options();
    let qty = create_rw_signal(1u32);
    let size = create_rw_signal(sizes.first().map(|(label, _)| label.clone()).unwrap_or_default());

    let unit_price = {
        let sizes = sizes.clone();
        move || {
            let selected = size.get();
            sizes
                .iter()
                .find(|(label, _)| *label == selected)
                .map(|(_, price)| *price)
                .unwrap_or(0)
        }
    };
    let current_price = move || line_price(unit_price(), qty.get());

    let on_add = {
        let item = item.clone();
        let current_price = current_price.clone();
        move |_| {
            cart.dispatch(CartAction::Add(CartItem {
                id: item.id.clone(),
                name: item.name.clone(),
                qty: qty.get_untracked(),
                size: size.get_untracked(),
                price: current_price(),
                img: item.img.clone(),
            }));
        }
    };

    view! {
        <div class="card food-card">
            <img src=item.img.clone() class="card-img-top" alt=item.name.clone() />
            <div class="card-body">
                <h5 class="card-title">{item.name.clone()}</h5>
                <div class="food-card-options">
                    <select
                        class="form-select"
                        aria-label=i18n.t("home.quantity")
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                qty.set(value);
                            }
                        }
                    >
                        {(1..=MAX_QUANTITY)
                            .map(|n| view! { <option value=n.to_string()>{n}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class="form-select"
                        aria-label=i18n.t("home.size")
                        on:change=move |ev| size.set(event_target_value(&ev))
                    >
                        {sizes
                            .iter()
                            .map(|(label, _)| view! { <option value=label.clone()>{label.clone()}</option> })
                            .collect_view()}
                    </select>
                    <span class="food-card-price">{current_price}</span>
                </div>
                <button type="button" class="btn bg-success text-white" on:click=on_add>
                    {i18n.t("home.add_to_cart")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_price() {
        assert_eq!(line_price(130, 3), 390);
        assert_eq!(line_price(0, MAX_QUANTITY), 0);
        assert_eq!(line_price(u32::MAX, 2), u32::MAX);
    }
}
