use crate::domain::a002_sale::Sale;
use crate::shared::serde_helpers::amount;
use serde::{Deserialize, Serialize};

/// Totals for one date range, as computed by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    #[serde(default)]
    pub total_sales: u64,
    #[serde(default, deserialize_with = "amount")]
    pub total_amount: f64,
    #[serde(default)]
    pub paid_sales: u64,
    #[serde(default, deserialize_with = "amount")]
    pub paid_amount: f64,
    #[serde(default)]
    pub unpaid_sales: u64,
    #[serde(default, deserialize_with = "amount")]
    pub unpaid_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub avg_ticket: f64,
}

/// Relative change, in percent, of the current period against the previous one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodChanges {
    #[serde(default)]
    pub sales_count: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub avg_ticket: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub current: PeriodSummary,
    pub previous: PeriodSummary,
    pub changes: PeriodChanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelTotal {
    /// Sales without a channel come back as `null`
    #[serde(default)]
    pub channel: Option<String>,
    pub count: u64,
    #[serde(deserialize_with = "amount")]
    pub total: f64,
}

impl ChannelTotal {
    pub fn label(&self) -> String {
        self.channel.clone().unwrap_or_else(|| "Sin canal".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTotal {
    /// Raw delivery code (`cadeteria`, `retiro`, `correo`) or `null`
    #[serde(rename = "type", default)]
    pub delivery_type: Option<String>,
    pub count: u64,
    #[serde(deserialize_with = "amount")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: u64,
    #[serde(deserialize_with = "amount")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub id: i64,
    pub name: String,
    pub purchases: u64,
    #[serde(deserialize_with = "amount")]
    pub total: f64,
}

/// Response of `GET /reports/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub comparison: Comparison,
    #[serde(default)]
    pub channels: Vec<ChannelTotal>,
    #[serde(default)]
    pub delivery_types: Vec<DeliveryTotal>,
    #[serde(default)]
    pub daily_sales: Vec<DailySales>,
    #[serde(default)]
    pub top_customers: Vec<TopCustomer>,
}

/// Response of `GET /reports/sales-summary?start_date&end_date`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummaryReport {
    pub summary: PeriodSummary,
    #[serde(default)]
    pub by_channel: Vec<ChannelTotal>,
    #[serde(default)]
    pub by_delivery: Vec<DeliveryTotal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangesCounters {
    #[serde(default)]
    pub total_changes: u64,
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default)]
    pub overdue_count: u64,
    #[serde(default)]
    pub changes_this_month: u64,
}

/// One month of the changes trend, labelled like "Jun 2024"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub count: u64,
}

/// Response of `GET /reports/changes-stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangesStats {
    pub stats: ChangesCounters,
    #[serde(default)]
    pub trend: Vec<MonthCount>,
    #[serde(default)]
    pub pending: Vec<Sale>,
    #[serde(default)]
    pub overdue: Vec<Sale>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinRequest {
    pub pin: String,
}

/// Response of `POST /reports/verify-pin`; a wrong PIN comes back with 401
/// and the same shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_payload() {
        let json = r#"{
            "comparison": {
                "current": {"total_sales": 12, "total_amount": 240000.0, "paid_sales": 10,
                            "paid_amount": 200000.0, "unpaid_sales": 2, "unpaid_amount": 40000.0,
                            "avg_ticket": 20000.0},
                "previous": {"total_sales": 0, "total_amount": 0, "paid_sales": 0,
                             "paid_amount": 0, "unpaid_sales": 0, "unpaid_amount": 0,
                             "avg_ticket": 0},
                "changes": {"sales_count": 100, "total_amount": 100, "avg_ticket": 100}
            },
            "channels": [{"channel": null, "count": 2, "total": 5000.0}],
            "delivery_types": [{"type": "retiro", "count": 3, "total": 9000.0}],
            "daily_sales": [{"date": "2024-06-01", "count": 1, "total": 1000.0}],
            "top_customers": [{"id": 7, "name": "Ana Diaz", "purchases": 3, "total": 60000.0}]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.comparison.current.unpaid_sales, 2);
        assert_eq!(data.comparison.changes.total_amount, 100.0);
        assert_eq!(data.channels[0].label(), "Sin canal");
        assert_eq!(data.delivery_types[0].delivery_type.as_deref(), Some("retiro"));
        assert_eq!(data.top_customers[0].name, "Ana Diaz");
    }

    #[test]
    fn test_wrong_pin_body() {
        let res: PinResponse =
            serde_json::from_str(r#"{"valid": false, "message": "PIN incorrecto"}"#).unwrap();
        assert!(!res.valid);
        assert_eq!(res.message.as_deref(), Some("PIN incorrecto"));
    }
}
