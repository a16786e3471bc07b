pub const HOME_PATH: &str = "/";
pub const MY_ORDERS_PATH: &str = "/MyOrders";
