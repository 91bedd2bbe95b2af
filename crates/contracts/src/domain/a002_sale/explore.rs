use super::aggregate::Sale;
use crate::enums::PaymentMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters of the sales explorer. Empty filters are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl ExploreFilter {
    pub fn is_empty(&self) -> bool {
        *self == ExploreFilter::default()
    }

    /// Query for one page of this filter (pages are 1-based)
    pub fn query(&self, page: u32) -> ExploreQuery {
        ExploreQuery {
            customer_id: self.customer_id,
            payment_method: self.payment_method,
            paid: self.paid,
            date_from: self.date_from,
            date_to: self.date_to,
            page: page.max(1),
        }
    }
}

/// Query string of `GET /sales/explore/json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    pub page: u32,
}

/// One page of the explorer listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorePage {
    pub sales: Vec<Sale>,
    pub page: u32,
    pub per_page: u32,
    pub total_sales: u64,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_filter_and_clamps_page() {
        let filter = ExploreFilter {
            customer_id: Some(7),
            paid: Some(true),
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        let q = filter.query(0);
        assert_eq!(q.page, 1);
        assert_eq!(q.customer_id, Some(7));
        assert_eq!(q.paid, Some(true));

        let json = serde_json::to_value(filter.query(3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "customer_id": 7, "paid": true, "date_from": "2024-01-01", "page": 3
            })
        );
    }

    #[test]
    fn test_empty_filter() {
        assert!(ExploreFilter::default().is_empty());
        let f = ExploreFilter {
            payment_method: Some(PaymentMethod::Card),
            ..Default::default()
        };
        assert!(!f.is_empty());
    }
}
