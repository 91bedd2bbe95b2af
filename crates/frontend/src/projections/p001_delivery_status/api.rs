use crate::shared::api_utils::{get_json, post_action, ApiError};
use contracts::projections::p001_delivery_status::{DeliveryChannel, StatusBuckets};
use contracts::shared::ApiMessage;

pub async fn fetch_buckets(channel: DeliveryChannel) -> Result<StatusBuckets, ApiError> {
    get_json(channel.stats_path()).await
}

/// Mark received / delivered / shipped, depending on the channel
pub async fn complete(channel: DeliveryChannel, sale_id: i64) -> Result<ApiMessage, ApiError> {
    post_action(&channel.action_path(sale_id)).await
}
