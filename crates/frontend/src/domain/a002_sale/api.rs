use crate::shared::api_utils::{delete, get_json, post_action, post_json, put_json, ApiError};
use contracts::domain::a002_sale::{
    CreatedSale, ExplorePage, ExploreQuery, LastSale, Sale, SaleEditPayload, SalePayload,
};
use contracts::shared::ApiMessage;

pub async fn get_sale(id: i64) -> Result<Sale, ApiError> {
    get_json(&format!("/sales/{}", id)).await
}

pub async fn create_sale(payload: &SalePayload) -> Result<CreatedSale, ApiError> {
    post_json("/sales", payload).await
}

pub async fn update_sale(id: i64, payload: &SalePayload) -> Result<ApiMessage, ApiError> {
    put_json(&format!("/sales/{}", id), payload).await
}

/// Update from the explorer modal, which leaves customer and channel untouched
pub async fn update_sale_fields(id: i64, payload: &SaleEditPayload) -> Result<ApiMessage, ApiError> {
    put_json(&format!("/sales/{}", id), payload).await
}

pub async fn delete_sale(id: i64) -> Result<ApiMessage, ApiError> {
    delete(&format!("/sales/{}", id)).await
}

/// Most recent sales for the entry page table
pub async fn last_sales() -> Result<Vec<LastSale>, ApiError> {
    get_json("/sales/last_sales").await
}

pub async fn mark_paid(id: i64) -> Result<ApiMessage, ApiError> {
    post_action(&format!("/sales/{}/mark_paid", id)).await
}

pub fn explore_path(query: &ExploreQuery) -> String {
    format!(
        "/sales/explore/json?{}",
        serde_qs::to_string(query).unwrap_or_else(|_| format!("page={}", query.page))
    )
}

pub async fn explore(query: &ExploreQuery) -> Result<ExplorePage, ApiError> {
    get_json(&explore_path(query)).await
}
