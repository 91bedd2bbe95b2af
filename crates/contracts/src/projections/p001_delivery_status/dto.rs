use crate::domain::a002_sale::Sale;
use serde::{Deserialize, Serialize};

/// Response of the `/changes/stats`, `/delivery/retiro/stats` and
/// `/delivery/correo/stats` endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusBuckets {
    pub total_pending: usize,
    pub total_overdue: usize,
    #[serde(default)]
    pub pending: Vec<Sale>,
    #[serde(default)]
    pub overdue: Vec<Sale>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::PaymentMethod;

    #[test]
    fn test_bucket_with_unknown_payment_method() {
        let json = r#"{
            "total_pending": 2, "total_overdue": 0,
            "pending": [
                {"id": 1, "amount": 500, "payment_method": "debito", "delivery_type": "retiro"},
                {"id": 2, "amount": 700, "payment_method": "cash", "delivery_type": "retiro"}
            ],
            "overdue": []
        }"#;
        let buckets: StatusBuckets = serde_json::from_str(json).unwrap();
        assert_eq!(buckets.pending.len(), 2);
        assert_eq!(buckets.pending[0].payment(), None);
        assert_eq!(buckets.pending[0].payment_label(), "debito");
        assert_eq!(buckets.pending[1].payment(), Some(PaymentMethod::Cash));
    }
}
