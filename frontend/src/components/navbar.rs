use leptos::*;
use leptos_router::*;

use crate::cart::use_cart;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::cart_overlay::CartOverlay;
use crate::components::drawer::Drawer;
use crate::components::icon_button::{IconButton, MenuIcon};
use crate::components::login_modal::LoginModal;
use crate::components::modal::Modal;
use crate::components::signup_modal::SignupModal;
use crate::config::AppConfig;
use crate::i18n::use_i18n;
use crate::nav::{NavAction, NavItem, NavState, NavTarget, Overlay, Session, ToggleEvent};
use crate::session::{use_auth, RouterNavigator};

fn action_button_class(item: NavItem) -> &'static str {
    match item {
        NavItem::Logout => "btn bg-white text-danger mx-1",
        _ => "btn bg-white text-success mx-1",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let cart = use_cart();
    let i18n = use_i18n();
    let brand = expect_context::<AppConfig>().brand;
    let nav = NavState::new();

    let session = {
        let auth = auth.clone();
        Signal::derive(move || Session::from_token(auth.token().as_deref()))
    };

    let navigator = RouterNavigator(use_navigate());
    let on_logout = Callback::new(move |_: ()| auth.logout(&navigator));

    let on_action = Callback::new(move |action: NavAction| match action.overlay() {
        Some(overlay) => nav.open(overlay),
        None => on_logout.call(()),
    });

    let cart_badge = move |item: NavItem| {
        item.shows_cart_badge().then(|| {
            view! {
                " "
                <Badge variant=BadgeVariant::Danger pill=true>
                    {move || cart.len()}
                </Badge>
            }
        })
    };

    let desktop_links = move || {
        NavItem::for_session(session.get())
            .iter()
            .filter_map(|&item| match item.target() {
                NavTarget::Route(path) => Some(view! {
                    <li class="nav-item">
                        <A href=path class="nav-link active fs-5">
                            {move || i18n.t(item.label_key())}
                        </A>
                    </li>
                }),
                NavTarget::Action(_) => None,
            })
            .collect_view()
    };

    let desktop_actions = move || {
        NavItem::for_session(session.get())
            .iter()
            .filter_map(|&item| match item.target() {
                NavTarget::Action(action) => Some(view! {
                    <button
                        type="button"
                        class=action_button_class(item)
                        on:click=move |_| on_action.call(action)
                    >
                        {move || i18n.t(item.label_key())}
                        {cart_badge(item)}
                    </button>
                }),
                NavTarget::Route(_) => None,
            })
            .collect_view()
    };

    let drawer_items = move || {
        NavItem::for_session(session.get())
            .iter()
            .map(|&item| match item.target() {
                NavTarget::Route(path) => view! {
                    <li class="drawer-item">
                        <A href=path class="drawer-link">
                            {move || i18n.t(item.label_key())}
                        </A>
                    </li>
                }
                .into_view(),
                NavTarget::Action(action) => view! {
                    <li class="drawer-item">
                        <button
                            type="button"
                            class="drawer-link"
                            on:click=move |_| on_action.call(action)
                        >
                            {move || i18n.t(item.label_key())}
                        </button>
                    </li>
                }
                .into_view(),
            })
            .collect_view()
    };

    view! {
        <div>
            <nav class="navbar navbar-dark bg-success shadow-lg">
                <div class="navbar-content">
                    <A href="/" class="navbar-brand">{brand}</A>

                    <IconButton
                        aria_label=i18n.t("nav.menu")
                        class="navbar-toggle"
                        on_click=Callback::new(move |_| nav.toggle_drawer(true, &ToggleEvent::Click))
                    >
                        <MenuIcon />
                    </IconButton>

                    <div class="navbar-links">
                        <ul class="navbar-nav">{desktop_links}</ul>
                        <div class="navbar-actions">{desktop_actions}</div>
                    </div>
                </div>
            </nav>

            <Drawer
                open=Signal::derive(move || nav.is_open(Overlay::Drawer))
                on_close=move |event: ToggleEvent| nav.toggle_drawer(false, &event)
            >
                <ul class="drawer-list">{drawer_items}</ul>
            </Drawer>

            <Show when=move || nav.is_open(Overlay::Cart)>
                <Modal
                    title=i18n.t("cart.title")
                    class="modal-wide"
                    on_close=move |_| nav.close(Overlay::Cart)
                >
                    <CartOverlay />
                </Modal>
            </Show>
            <Show when=move || nav.is_open(Overlay::Login)>
                <LoginModal on_close=move |_| nav.close(Overlay::Login) />
            </Show>
            <Show when=move || nav.is_open(Overlay::Signup)>
                <SignupModal on_close=move |_| nav.close(Overlay::Signup) />
            </Show>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::rc::Rc;

    use shared::CartItem;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;
    use crate::api::ApiClient;
    use crate::cart::{CartAction, CartState};
    use crate::i18n::{provide_i18n, Language};
    use crate::session::{AuthContext, MemoryTokenStore, TokenStore};

    wasm_bindgen_test_configure!(run_in_browser);

    fn line(n: usize) -> CartItem {
        CartItem {
            id: n.to_string(),
            name: format!("dish {n}"),
            qty: 1,
            size: "full".to_string(),
            price: 100,
            img: String::new(),
        }
    }

    fn mount_navbar(store: MemoryTokenStore, lines: usize) -> (HtmlElement, CartState) {
        let container: HtmlElement = document()
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        document().body().unwrap().append_child(&container).unwrap();

        let cart = CartState::new();
        for n in 0..lines {
            cart.dispatch(CartAction::Add(line(n)));
        }

        mount_to(container.clone(), move || {
            provide_context(AppConfig::default());
            provide_context(ApiClient::new("/api"));
            provide_context(AuthContext::new(Rc::new(store), "token"));
            provide_context(cart);
            provide_i18n(Language::En);
            view! {
                <Router>
                    <Navbar />
                </Router>
            }
        });
        (container, cart)
    }

    fn texts(container: &HtmlElement, selector: &str) -> Vec<String> {
        let nodes = container.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.text_content())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn count(container: &HtmlElement, selector: &str) -> u32 {
        container.query_selector_all(selector).unwrap().length()
    }

    fn click(container: &HtmlElement, selector: &str) {
        let element: HtmlElement = container
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        element.click();
    }

    fn click_button(container: &HtmlElement, label: &str) {
        let nodes = container.query_selector_all("button").unwrap();
        let button: HtmlElement = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .find(|node| {
                node.text_content()
                    .is_some_and(|text| text.trim().starts_with(label))
            })
            .unwrap()
            .dyn_into()
            .unwrap();
        button.click();
    }

    #[wasm_bindgen_test]
    fn test_badge_shows_cart_length() {
        for lines in [0, 1, 4] {
            let (container, _) = mount_navbar(MemoryTokenStore::with_entry("token", "t"), lines);
            assert_eq!(texts(&container, ".badge"), vec![lines.to_string()]);
        }
    }

    #[wasm_bindgen_test]
    fn test_badge_follows_cart_changes() {
        let (container, cart) = mount_navbar(MemoryTokenStore::with_entry("token", "t"), 2);

        cart.dispatch(CartAction::Add(line(9)));
        assert_eq!(texts(&container, ".badge"), vec!["3".to_string()]);

        cart.dispatch(CartAction::Drop);
        assert_eq!(texts(&container, ".badge"), vec!["0".to_string()]);
    }

    #[wasm_bindgen_test]
    fn test_anonymous_view() {
        let (container, _) = mount_navbar(MemoryTokenStore::new(), 3);

        assert_eq!(texts(&container, ".navbar-actions button"), vec!["Login", "Signup"]);
        assert_eq!(texts(&container, ".navbar-nav a"), vec!["Home"]);
        assert_eq!(count(&container, ".badge"), 0);
    }

    #[wasm_bindgen_test]
    fn test_authenticated_view() {
        let (container, _) = mount_navbar(MemoryTokenStore::with_entry("token", "t"), 3);

        assert_eq!(
            texts(&container, ".navbar-actions button"),
            vec!["My Cart 3", "Logout"]
        );
        assert_eq!(texts(&container, ".navbar-nav a"), vec!["Home", "My Orders"]);
    }

    #[wasm_bindgen_test]
    fn test_drawer_lists_session_items() {
        let (container, _) = mount_navbar(MemoryTokenStore::with_entry("token", "t"), 0);
        assert_eq!(count(&container, ".drawer"), 0);

        click(&container, ".navbar-toggle");

        assert_eq!(
            texts(&container, ".drawer-list li"),
            vec!["Home", "My Orders", "My Cart", "Logout"]
        );
    }

    #[wasm_bindgen_test]
    fn test_my_cart_mounts_one_modal_until_closed() {
        let (container, _) = mount_navbar(MemoryTokenStore::with_entry("token", "t"), 1);
        assert_eq!(count(&container, ".modal"), 0);

        click_button(&container, "My Cart");
        assert_eq!(count(&container, ".modal"), 1);

        click(&container, ".modal-close");
        assert_eq!(count(&container, ".modal"), 0);

        click_button(&container, "My Cart");
        assert_eq!(count(&container, ".modal"), 1);
    }

    #[wasm_bindgen_test]
    fn test_login_and_signup_can_both_be_open() {
        let (container, _) = mount_navbar(MemoryTokenStore::new(), 0);

        click_button(&container, "Signup");
        click_button(&container, "Login");

        assert_eq!(count(&container, ".modal"), 2);
    }

    #[wasm_bindgen_test]
    fn test_logout_switches_to_anonymous_view() {
        let store = MemoryTokenStore::with_entry("token", "t");
        let (container, _) = mount_navbar(store.clone(), 2);

        click_button(&container, "Logout");

        assert!(store.get("token").is_none());
        assert_eq!(texts(&container, ".navbar-actions button"), vec!["Login", "Signup"]);
    }
}
