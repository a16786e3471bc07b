pub mod home;
pub mod my_orders;
