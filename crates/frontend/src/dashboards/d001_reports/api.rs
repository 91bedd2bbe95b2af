use crate::shared::api_utils::{get_json, post_json, ApiError};
use chrono::NaiveDate;
use contracts::dashboards::d001_reports::{
    ChangesStats, DashboardData, PinRequest, PinResponse, SalesSummaryReport, TopCustomer,
};
use serde::Serialize;

/// Rows of the custom top-customers report
pub const TOP_CUSTOMERS_LIMIT: u32 = 20;

#[derive(Debug, Serialize)]
struct RangeQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

fn range_path(base: &str, start: NaiveDate, end: NaiveDate, limit: Option<u32>) -> String {
    let query = RangeQuery {
        start_date: start,
        end_date: end,
        limit,
    };
    match serde_qs::to_string(&query) {
        Ok(qs) => format!("{}?{}", base, qs),
        Err(e) => {
            log::error!("serializing report range: {}", e);
            base.to_string()
        }
    }
}

pub fn sales_summary_path(start: NaiveDate, end: NaiveDate) -> String {
    range_path("/reports/sales-summary", start, end, None)
}

pub fn top_customers_path(start: NaiveDate, end: NaiveDate) -> String {
    range_path("/reports/top-customers", start, end, Some(TOP_CUSTOMERS_LIMIT))
}

/// A wrong PIN comes back as 401 with `{valid: false, message}`
pub async fn verify_pin(pin: &str) -> Result<PinResponse, ApiError> {
    let body = PinRequest {
        pin: pin.to_string(),
    };
    match post_json::<_, PinResponse>("/reports/verify-pin", &body).await {
        Err(ApiError::Server { status: 401, message }) => Ok(PinResponse {
            valid: false,
            message: Some(message).filter(|m| !m.trim().is_empty()),
        }),
        other => other,
    }
}

pub async fn fetch_dashboard() -> Result<DashboardData, ApiError> {
    get_json("/reports/dashboard").await
}

pub async fn fetch_changes_stats() -> Result<ChangesStats, ApiError> {
    get_json("/reports/changes-stats").await
}

pub async fn fetch_sales_summary(start: NaiveDate, end: NaiveDate) -> Result<SalesSummaryReport, ApiError> {
    get_json(&sales_summary_path(start, end)).await
}

pub async fn fetch_top_customers(start: NaiveDate, end: NaiveDate) -> Result<Vec<TopCustomer>, ApiError> {
    get_json(&top_customers_path(start, end)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_paths() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(
            sales_summary_path(start, end),
            "/reports/sales-summary?start_date=2024-06-01&end_date=2024-06-30"
        );
        assert_eq!(
            top_customers_path(start, end),
            "/reports/top-customers?start_date=2024-06-01&end_date=2024-06-30&limit=20"
        );
    }
}
