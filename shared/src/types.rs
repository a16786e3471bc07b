use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

/// Reply to both `/loginuser` and `/createuser`.
///
/// `errors` is either a plain message or a list of validator entries,
/// depending on which check rejected the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl AuthResponse {
    /// Flattens `errors` into a single human readable line.
    pub fn error_message(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        match errors {
            serde_json::Value::String(message) => Some(message.clone()),
            serde_json::Value::Array(entries) => {
                let messages: Vec<String> = entries
                    .iter()
                    .filter_map(|entry| {
                        entry
                            .get("msg")
                            .and_then(|msg| msg.as_str())
                            .map(str::to_string)
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join(", "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

// ============================================================================
// Menu Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "CategoryName")]
    pub category_name: String,
    pub name: String,
    pub img: String,
    /// Size label to unit price, e.g. `{"half": "130", "full": "220"}`.
    #[serde(default)]
    pub options: Vec<BTreeMap<String, String>>,
    #[serde(default)]
    pub description: String,
}

impl FoodItem {
    /// Size labels with their parsed unit price. Unparseable prices are skipped.
    pub fn size_options(&self) -> Vec<(String, u32)> {
        self.options
            .iter()
            .flat_map(|option| option.iter())
            .filter_map(|(size, price)| {
                price
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .map(|price| (size.clone(), price))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCategory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "CategoryName")]
    pub category_name: String,
}

/// `/foodData` replies with a two element array: items, then categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodData(pub Vec<FoodItem>, pub Vec<FoodCategory>);

// ============================================================================
// Cart & Order Types
// ============================================================================

/// One line of the cart. `price` is the line total (unit price times `qty`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub qty: u32,
    pub size: String,
    pub price: u32,
    pub img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub email: String,
    pub order_data: Vec<CartItem>,
    pub order_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyOrdersRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_date: String,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyOrdersResponse {
    #[serde(default)]
    pub order_data: Vec<Order>,
}

// ============================================================================
// Tests
// ============================================================================
