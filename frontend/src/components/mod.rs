pub mod badge;
pub mod cart_overlay;
pub mod drawer;
pub mod food_card;
pub mod icon_button;
pub mod login_modal;
pub mod modal;
pub mod navbar;
pub mod signup_modal;
