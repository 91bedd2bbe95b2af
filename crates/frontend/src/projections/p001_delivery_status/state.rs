use chrono::NaiveDateTime;
use contracts::domain::a002_sale::Sale;
use contracts::projections::p001_delivery_status::{Age, DeliveryChannel, StatusBuckets};

#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub sale: Sale,
    pub age: Age,
    pub overdue: bool,
}

impl StatusRow {
    pub fn new(channel: DeliveryChannel, sale: Sale, now: NaiveDateTime) -> Self {
        Self {
            age: channel.age(&sale, now),
            overdue: channel.is_overdue(&sale, now),
            sale,
        }
    }

    /// Address and city for mail, phone for the rest
    pub fn contact(&self, channel: DeliveryChannel) -> String {
        if channel.shows_address() {
            let parts: Vec<&str> = [self.sale.customer_address.as_str(), self.sale.customer_city.as_str()]
                .into_iter()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            if parts.is_empty() {
                "-".to_string()
            } else {
                parts.join(", ")
            }
        } else {
            self.sale
                .customer_phone
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| "-".to_string())
        }
    }
}

/// One channel's worklist as rendered: counters plus both tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusView {
    pub total_pending: usize,
    pub total_overdue: usize,
    pub pending: Vec<StatusRow>,
    pub overdue: Vec<StatusRow>,
}

impl StatusView {
    pub fn from_buckets(channel: DeliveryChannel, buckets: StatusBuckets, now: NaiveDateTime) -> Self {
        let rows = |sales: Vec<Sale>| {
            sales
                .into_iter()
                .map(|s| StatusRow::new(channel, s, now))
                .collect::<Vec<_>>()
        };
        Self {
            total_pending: buckets.total_pending,
            total_overdue: buckets.total_overdue,
            pending: rows(buckets.pending),
            overdue: rows(buckets.overdue),
        }
    }

    /// The overdue table is shown only while the server counts any
    pub fn shows_overdue(&self) -> bool {
        self.total_overdue > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn buckets() -> StatusBuckets {
        serde_json::from_value(serde_json::json!({
            "total_pending": 1,
            "total_overdue": 1,
            "pending": [{
                "id": 1, "amount": 100, "created_at": "2024-06-18T12:00:00",
                "customer_phone": "555-1234",
                "customer_address": "Calle 1", "customer_city": "Quilmes"
            }],
            "overdue": [{
                "id": 2, "amount": 200, "created_at": "2024-06-01T12:00:00",
                "days_since_creation": 19, "customer_address": "", "customer_city": "Bernal"
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_rows_carry_age_and_status() {
        let view = StatusView::from_buckets(DeliveryChannel::Changes, buckets(), now());
        assert_eq!(view.pending[0].age, Age::Hours(48));
        assert!(!view.pending[0].overdue);
        assert!(view.overdue[0].overdue);
        assert!(view.shows_overdue());

        let mail = StatusView::from_buckets(DeliveryChannel::Mail, buckets(), now());
        assert_eq!(mail.overdue[0].age, Age::Days(19));
        assert_eq!(mail.overdue[0].age.label(), "19 días");
    }

    #[test]
    fn test_contact_column() {
        let view = StatusView::from_buckets(DeliveryChannel::Mail, buckets(), now());
        assert_eq!(view.pending[0].contact(DeliveryChannel::Mail), "Calle 1, Quilmes");
        assert_eq!(view.overdue[0].contact(DeliveryChannel::Mail), "Bernal");
        assert_eq!(view.pending[0].contact(DeliveryChannel::Pickup), "555-1234");
        assert_eq!(view.overdue[0].contact(DeliveryChannel::Pickup), "-");
    }

    #[test]
    fn test_overdue_section_hidden_when_zero() {
        let empty = StatusView::from_buckets(DeliveryChannel::Pickup, StatusBuckets::default(), now());
        assert!(!empty.shows_overdue());
        assert!(empty.pending.is_empty());
    }
}
