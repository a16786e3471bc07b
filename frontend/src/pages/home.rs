use leptos::*;
use shared::{FoodCategory, FoodData, FoodItem};

use crate::api::use_api;
use crate::components::food_card::FoodCard;
use crate::i18n::use_i18n;

/// Groups menu items under their category, keeping category order and
/// dropping categories without items.
pub(crate) fn group_by_category(
    items: &[FoodItem],
    categories: &[FoodCategory],
) -> Vec<(String, Vec<FoodItem>)> {
    categories
        .iter()
        .filter_map(|category| {
            let matching: Vec<FoodItem> = items
                .iter()
                .filter(|item| item.category_name == category.category_name)
                .cloned()
                .collect();
            (!matching.is_empty()).then(|| (category.category_name.clone(), matching))
        })
        .collect()
}

#[component]
pub fn Home() -> impl IntoView {
    let api = use_api();
    let i18n = use_i18n();

    let menu = create_rw_signal(Vec::<(String, Vec<FoodItem>)>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match api.food_data().await {
            Ok(FoodData(items, categories)) => {
                menu.set(group_by_category(&items, &categories));
            }
            Err(e) => {
                tracing::warn!(%e, "could not load menu");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="container">
            <h2 class="page-title">{i18n.t("home.title")}</h2>
            {move || error.get().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}
            {move || {
                if loading.get() {
                    view! { <p class="loading">{i18n.t("common.loading")}</p> }.into_view()
                } else if menu.with(Vec::is_empty) {
                    view! { <p class="empty-state">{i18n.t("home.empty")}</p> }.into_view()
                } else {
                    menu.get()
                        .into_iter()
                        .map(|(category, items)| view! {
                            <section class="menu-category">
                                <h3 class="menu-category-title">{category}</h3>
                                <hr />
                                <div class="menu-grid">
                                    {items
                                        .into_iter()
                                        .map(|item| view! { <FoodCard item=item /> })
                                        .collect_view()}
                                </div>
                            </section>
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}
