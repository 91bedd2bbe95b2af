use crate::enums::{delivery_display_name, payment_display_name, DeliveryType, PaymentMethod};
use crate::shared::serde_helpers::{amount, null_as_empty, null_as_false};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sale as serialized by the back office (`GET /sales/{id}`, stats buckets,
/// shipment day lists, explore pages).
///
/// Customer data is flattened into `customer_*` fields by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_city: String,
    #[serde(default)]
    pub customer_phone: Option<String>,

    #[serde(default)]
    pub sale_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(deserialize_with = "amount")]
    pub amount: f64,
    /// Raw code as stored by the server; see [`Sale::payment`]
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub paid: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,

    #[serde(default, deserialize_with = "null_as_false")]
    pub has_shipping: bool,
    #[serde(default)]
    pub shipping_date: Option<NaiveDate>,
    #[serde(default)]
    pub sales_channel: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_cash: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub has_change: bool,
    #[serde(default)]
    pub delivery_type: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,

    /// Age in days precomputed by the delivery stats endpoints
    #[serde(default)]
    pub days_since_creation: Option<i64>,
    /// Overdue flag precomputed by the server, when it sends one
    #[serde(default, alias = "is_overdue")]
    pub overdue: Option<bool>,
}

impl Sale {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.customer_first_name, self.customer_last_name)
    }

    /// Known payment method, `None` for blank or unrecognised codes
    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment_method.as_deref().and_then(PaymentMethod::from_code)
    }

    pub fn payment_label(&self) -> String {
        payment_display_name(self.payment_method.as_deref())
    }

    pub fn delivery(&self) -> Option<DeliveryType> {
        self.delivery_type.as_deref().and_then(DeliveryType::from_code)
    }

    pub fn delivery_label(&self) -> String {
        delivery_display_name(self.delivery_type.as_deref())
    }

    pub fn notes_or_dash(&self) -> &str {
        if self.notes.trim().is_empty() {
            "-"
        } else {
            &self.notes
        }
    }
}

/// Row of `GET /sales/last_sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSale {
    pub id: i64,
    #[serde(default)]
    pub sale_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_last_name: String,
    #[serde(deserialize_with = "amount")]
    pub amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub paid: bool,
}

impl LastSale {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.customer_first_name, self.customer_last_name)
    }

    pub fn payment_label(&self) -> String {
        payment_display_name(self.payment_method.as_deref())
    }
}

/// Body for `POST /sales` and `PUT /sales/{id}` from the sales entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    pub customer_id: i64,
    pub amount: f64,
    pub payment_method: Option<PaymentMethod>,
    pub paid: bool,
    pub notes: String,
    pub delivery_type: DeliveryType,
    pub has_shipping: bool,
    pub shipping_date: Option<NaiveDate>,
    pub sales_channel: String,
    pub is_cash: bool,
    pub has_change: bool,
}

/// Body for `PUT /sales/{id}` from the explorer edit modal.
/// The modal never changes the customer or the sales channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEditPayload {
    pub amount: f64,
    pub notes: String,
    pub paid: bool,
    pub payment_method: Option<PaymentMethod>,
    pub delivery_type: Option<DeliveryType>,
    pub shipping_date: Option<NaiveDate>,
    pub has_change: bool,
}

/// Response of `POST /sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedSale {
    #[serde(default)]
    pub message: Option<String>,
    pub sale_id: i64,
}

/// Body for `PUT /sales/shipments/{id}`.
/// Drag-and-drop sends only the date; inline edit sends date and notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentUpdate {
    pub shipping_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShipmentUpdate {
    pub fn reschedule(shipping_date: NaiveDate) -> Self {
        Self {
            shipping_date,
            notes: None,
        }
    }

    pub fn edit(shipping_date: NaiveDate, notes: String) -> Self {
        Self {
            shipping_date,
            notes: Some(notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_from_serializer_output() {
        let json = r#"{
            "id": 12, "customer_id": 3,
            "customer_first_name": "Ana", "customer_last_name": "Gómez",
            "customer_address": "Calle 1", "customer_city": "Quilmes",
            "sale_date": "2024-05-01T10:00:00", "created_at": "2024-05-01T10:00:00",
            "amount": 15000.0, "payment_method": "transfer", "paid": true, "notes": null,
            "has_shipping": true, "shipping_date": "2024-05-03",
            "sales_channel": "local", "is_cash": false, "has_change": false,
            "delivery_type": "cadeteria", "completed_at": null
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.customer_name(), "Ana Gómez");
        assert_eq!(sale.delivery(), Some(DeliveryType::Courier));
        assert_eq!(sale.payment(), Some(PaymentMethod::Transfer));
        assert_eq!(sale.shipping_date, NaiveDate::from_ymd_opt(2024, 5, 3));
        assert_eq!(sale.notes_or_dash(), "-");
        assert_eq!(sale.days_since_creation, None);
    }

    #[test]
    fn test_unknown_codes_keep_the_row() {
        let json = r#"{"id": 7, "amount": 900, "payment_method": "mercadopago",
            "delivery_type": "moto", "paid": false}"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment(), None);
        assert_eq!(sale.payment_label(), "mercadopago");
        assert_eq!(sale.delivery(), None);
        assert_eq!(sale.delivery_label(), "moto");

        let json = r#"{"id": 8, "amount": 100, "payment_method": null}"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment_label(), "-");
        assert_eq!(sale.delivery_label(), "-");
    }

    #[test]
    fn test_last_sale_with_decimal_string_amount() {
        let json = r#"{"id":1,"sale_date":"2024-05-01T10:00:00","customer_first_name":"Ana",
            "customer_last_name":"Gómez","amount":"1500.00","payment_method":"cash","paid":false}"#;
        let sale: LastSale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.amount, 1500.0);
        assert_eq!(sale.payment_label(), "Efectivo");
    }

    #[test]
    fn test_reschedule_sends_only_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let body = serde_json::to_value(ShipmentUpdate::reschedule(date)).unwrap();
        assert_eq!(body, serde_json::json!({"shipping_date": "2024-05-03"}));

        let body = serde_json::to_value(ShipmentUpdate::edit(date, "timbre 2".into())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"shipping_date": "2024-05-03", "notes": "timbre 2"})
        );
    }
}
