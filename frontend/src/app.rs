use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::cart::provide_cart;
use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::i18n::{browser_language, provide_i18n};
use crate::pages::{home::Home, my_orders::MyOrders};
use crate::routes::{HOME_PATH, MY_ORDERS_PATH};
use crate::session::{AuthContext, LocalStorageTokenStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(ApiClient::new(&config.api_base));
    provide_context(AuthContext::new(
        Rc::new(LocalStorageTokenStore),
        &config.token_key,
    ));
    provide_context(config);
    provide_cart();
    provide_i18n(browser_language());

    view! {
        <Router>
            <Navbar />
            <main>
                <Routes>
                    <Route path=HOME_PATH view=Home />
                    <Route path=MY_ORDERS_PATH view=MyOrders />
                </Routes>
            </main>
        </Router>
    }
}
