use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    AuthResponse, CreateUserRequest, FoodData, LoginRequest, MyOrdersRequest, MyOrdersResponse,
    Order, OrderRequest, OrderResponse,
};

use crate::error::ClientError;

const FALLBACK_REJECTION: &str = "Enter valid credentials";

/// Thin JSON client for the ordering API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let url = self.url(path);
        let response = match body {
            Some(body) => Request::post(&url).json(body)?.send().await?,
            None => Request::post(&url).send().await?,
        };
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ClientError> {
        if !response.ok() {
            tracing::warn!(path, status = response.status(), "request rejected");
            return Err(ClientError::Rejected(format!(
                "server replied with status {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    /// Returns the session token on success.
    pub async fn login(&self, request: LoginRequest) -> Result<String, ClientError> {
        let response: AuthResponse = self.post("/loginuser", Some(&request)).await?;
        accepted(response)?.ok_or_else(|| ClientError::Rejected(FALLBACK_REJECTION.to_string()))
    }

    /// Returns a session token if the server signs the new user in directly.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<Option<String>, ClientError> {
        let response: AuthResponse = self.post("/createuser", Some(&request)).await?;
        accepted(response)
    }

    pub async fn food_data(&self) -> Result<FoodData, ClientError> {
        self.post::<(), _>("/foodData", None).await
    }

    pub async fn place_order(&self, request: OrderRequest) -> Result<(), ClientError> {
        let response: OrderResponse = self.post("/orderData", Some(&request)).await?;
        if response.success {
            Ok(())
        } else {
            Err(ClientError::Rejected("order was not accepted".to_string()))
        }
    }

    pub async fn my_orders(&self, email: &str) -> Result<Vec<Order>, ClientError> {
        let request = MyOrdersRequest {
            email: email.to_string(),
        };
        let response: MyOrdersResponse = self.post("/myOrderData", Some(&request)).await?;
        Ok(response.order_data)
    }
}

fn accepted(response: AuthResponse) -> Result<Option<String>, ClientError> {
    if response.success {
        Ok(response.auth_token)
    } else {
        let message = response
            .error_message()
            .unwrap_or_else(|| FALLBACK_REJECTION.to_string());
        Err(ClientError::Rejected(message))
    }
}

pub fn use_api() -> ApiClient {
    leptos::expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> AuthResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("https://orders.example.test/api/");
        assert_eq!(
            client.url("/loginuser"),
            "https://orders.example.test/api/loginuser"
        );
        assert_eq!(ApiClient::new("/api").url("/foodData"), "/api/foodData");
    }

    #[test]
    fn test_accepted_with_token() {
        let token = accepted(reply(r#"{"success": true, "authToken": "jwt"}"#)).unwrap();
        assert_eq!(token.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_accepted_without_token() {
        let token = accepted(reply(r#"{"success": true}"#)).unwrap();
        assert!(token.is_none());
    }

    #[test]
    fn test_rejection_uses_server_message() {
        let err = accepted(reply(r#"{"success": false, "errors": "Email already used"}"#))
            .unwrap_err();
        assert_eq!(err, ClientError::Rejected("Email already used".to_string()));
    }

    #[test]
    fn test_rejection_without_message_falls_back() {
        let err = accepted(reply(r#"{"success": false}"#)).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_REJECTION);
    }
}
