use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

use crate::nav::ToggleEvent;

/// Keys the drawer reports as close requests. Escape closes; Tab and Shift
/// are passed on so the owner can ignore focus movement.
const CLOSE_REQUEST_KEYS: &[&str] = &["Escape", "Tab", "Shift"];

pub(crate) fn close_request_for_key(key: &str) -> Option<ToggleEvent> {
    CLOSE_REQUEST_KEYS
        .contains(&key)
        .then(|| ToggleEvent::Key(key.to_string()))
}

/// Left slide-in panel. Only mounted while `open` is true.
///
/// Keys are read from a window listener that exists only while the drawer
/// is open, so Escape works no matter where focus sits.
#[component]
pub fn Drawer(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<ToggleEvent>,
    children: ChildrenFn,
) -> impl IntoView {
    let key_listener = store_value(None::<WindowListenerHandle>);

    create_effect(move |_| {
        let is_open = open.get();
        key_listener.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.remove();
            }
            if is_open {
                *slot = Some(window_event_listener(ev::keydown, move |ev| {
                    if let Some(request) = close_request_for_key(&ev.key()) {
                        on_close.call(request);
                    }
                }));
            }
        });
    });

    on_cleanup(move || {
        key_listener.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.remove();
            }
        });
    });

    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| on_close.call(ToggleEvent::Click)></div>
            <aside class="drawer drawer-left" role="dialog" aria-modal="true">
                {children()}
            </aside>
        </Show>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::nav::{NavState, Overlay};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        document().body().unwrap().dispatch_event(&event).unwrap();
    }

    fn mount_drawer() -> (web_sys::HtmlElement, NavState) {
        let container: web_sys::HtmlElement = document()
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        document().body().unwrap().append_child(&container).unwrap();

        let nav = NavState::new();
        mount_to(container.clone(), move || {
            view! {
                <Drawer
                    open=Signal::derive(move || nav.is_open(Overlay::Drawer))
                    on_close=move |event: ToggleEvent| nav.toggle_drawer(false, &event)
                >
                    <p class="drawer-content">"items"</p>
                </Drawer>
            }
        });
        (container, nav)
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_drawer_without_focusing_it() {
        let (container, nav) = mount_drawer();
        nav.toggle_drawer(true, &ToggleEvent::Click);
        assert!(container.query_selector(".drawer").unwrap().is_some());

        press("Escape");

        assert!(!nav.is_open(Overlay::Drawer));
        assert!(container.query_selector(".drawer").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_focus_keys_keep_drawer_mounted() {
        let (container, nav) = mount_drawer();
        nav.toggle_drawer(true, &ToggleEvent::Click);

        press("Tab");
        press("Shift");
        press("Enter");

        assert!(nav.is_open(Overlay::Drawer));
        assert!(container.query_selector(".drawer-content").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_closed_drawer_ignores_keys() {
        let (container, nav) = mount_drawer();
        nav.toggle_drawer(true, &ToggleEvent::Click);
        press("Escape");
        press("Escape");

        assert!(!nav.is_open(Overlay::Drawer));
        assert!(container.query_selector(".drawer").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_backdrop_click_closes_drawer() {
        let (container, nav) = mount_drawer();
        nav.toggle_drawer(true, &ToggleEvent::Click);

        let backdrop: web_sys::HtmlElement = container
            .query_selector(".drawer-backdrop")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        backdrop.click();

        assert!(!nav.is_open(Overlay::Drawer));
    }
}
