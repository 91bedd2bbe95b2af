use crate::shared::api_utils::{encode_param, get_json, post_json, put_json, ApiError};
use contracts::domain::a001_customer::{Customer, CustomerPayload};
use contracts::shared::ApiMessage;

/// Customers whose name, address or city matches `query`
pub async fn search_customers(query: &str) -> Result<Vec<Customer>, ApiError> {
    get_json(&format!("/customers/search?q={}", encode_param(query))).await
}

pub async fn create_customer(payload: &CustomerPayload) -> Result<ApiMessage, ApiError> {
    post_json("/customers", payload).await
}

pub async fn update_customer(id: i64, payload: &CustomerPayload) -> Result<ApiMessage, ApiError> {
    put_json(&format!("/customers/{}", id), payload).await
}
