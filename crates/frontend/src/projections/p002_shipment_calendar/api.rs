use crate::shared::api_utils::{get_json, put_json, ApiError};
use crate::shared::format::iso_date;
use chrono::NaiveDate;
use contracts::domain::a002_sale::{Sale, ShipmentUpdate};
use contracts::projections::p002_shipment_calendar::CalendarCounts;
use contracts::shared::ApiMessage;

/// Shipment count per `YYYY-MM-DD`; days without shipments are absent
pub async fn fetch_counts() -> Result<CalendarCounts, ApiError> {
    get_json("/sales/shipments/calendar").await
}

pub async fn fetch_day(date: NaiveDate) -> Result<Vec<Sale>, ApiError> {
    get_json(&format!("/sales/shipments/day/{}", iso_date(date))).await
}

pub async fn update_shipment(sale_id: i64, update: &ShipmentUpdate) -> Result<ApiMessage, ApiError> {
    put_json(&format!("/sales/shipments/{}", sale_id), update).await
}
