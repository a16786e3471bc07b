//! Navbar model: which entries a session sees, and the visibility flags
//! behind the drawer and the three overlays.

use leptos::*;

use crate::routes::{HOME_PATH, MY_ORDERS_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated,
}

impl Session {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(_) => Session::Authenticated,
            None => Session::Anonymous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    OpenCart,
    OpenLogin,
    OpenSignup,
    Logout,
}

impl NavAction {
    /// The overlay this action opens. Logout opens nothing.
    pub fn overlay(self) -> Option<Overlay> {
        match self {
            NavAction::OpenCart => Some(Overlay::Cart),
            NavAction::OpenLogin => Some(Overlay::Login),
            NavAction::OpenSignup => Some(Overlay::Signup),
            NavAction::Logout => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(&'static str),
    Action(NavAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    MyOrders,
    MyCart,
    Logout,
    Login,
    Signup,
}

const ANONYMOUS_ITEMS: &[NavItem] = &[NavItem::Home, NavItem::Login, NavItem::Signup];
const AUTHENTICATED_ITEMS: &[NavItem] = &[
    NavItem::Home,
    NavItem::MyOrders,
    NavItem::MyCart,
    NavItem::Logout,
];

impl NavItem {
    /// Entries in display order. Desktop and drawer show the same set.
    pub fn for_session(session: Session) -> &'static [NavItem] {
        match session {
            Session::Anonymous => ANONYMOUS_ITEMS,
            Session::Authenticated => AUTHENTICATED_ITEMS,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            NavItem::Home => "nav.home",
            NavItem::MyOrders => "nav.my_orders",
            NavItem::MyCart => "nav.my_cart",
            NavItem::Logout => "nav.logout",
            NavItem::Login => "nav.login",
            NavItem::Signup => "nav.signup",
        }
    }

    pub fn target(self) -> NavTarget {
        match self {
            NavItem::Home => NavTarget::Route(HOME_PATH),
            NavItem::MyOrders => NavTarget::Route(MY_ORDERS_PATH),
            NavItem::MyCart => NavTarget::Action(NavAction::OpenCart),
            NavItem::Logout => NavTarget::Action(NavAction::Logout),
            NavItem::Login => NavTarget::Action(NavAction::OpenLogin),
            NavItem::Signup => NavTarget::Action(NavAction::OpenSignup),
        }
    }

    /// Only the cart entry carries the item count.
    pub fn shows_cart_badge(self) -> bool {
        self == NavItem::MyCart
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Cart,
    Login,
    Signup,
    Drawer,
}

/// What asked the drawer to change state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleEvent {
    Key(String),
    Click,
}

impl ToggleEvent {
    /// Tab and Shift move focus inside the drawer; they must not close it.
    pub fn is_focus_traversal(&self) -> bool {
        matches!(self, ToggleEvent::Key(key) if key == "Tab" || key == "Shift")
    }
}

/// Visibility flags owned by the navbar. Each flag is independent; opening
/// one never closes another.
#[derive(Debug, Clone, Copy)]
pub struct NavState {
    cart: RwSignal<bool>,
    login: RwSignal<bool>,
    signup: RwSignal<bool>,
    drawer: RwSignal<bool>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            cart: create_rw_signal(false),
            login: create_rw_signal(false),
            signup: create_rw_signal(false),
            drawer: create_rw_signal(false),
        }
    }

    fn flag(self, overlay: Overlay) -> RwSignal<bool> {
        match overlay {
            Overlay::Cart => self.cart,
            Overlay::Login => self.login,
            Overlay::Signup => self.signup,
            Overlay::Drawer => self.drawer,
        }
    }

    pub fn is_open(self, overlay: Overlay) -> bool {
        self.flag(overlay).get()
    }

    pub fn open(self, overlay: Overlay) {
        tracing::debug!(?overlay, "open");
        self.flag(overlay).set(true);
    }

    pub fn close(self, overlay: Overlay) {
        tracing::debug!(?overlay, "close");
        self.flag(overlay).set(false);
    }

    /// Drawer open/close request. Focus traversal keys are ignored.
    pub fn toggle_drawer(self, open: bool, event: &ToggleEvent) {
        if event.is_focus_traversal() {
            return;
        }
        self.drawer.set(open);
    }
}
