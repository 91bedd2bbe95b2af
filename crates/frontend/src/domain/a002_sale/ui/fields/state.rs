//! Field set shared by the sales entry form and the explorer edit modal.
//!
//! Payment method and paid flag constrain each other in both directions:
//! with "cash" selected, "paid = yes" is disabled (and cash forces "no");
//! with "paid = yes" selected, "cash" is disabled. Selecting a disabled
//! option is rejected rather than overriding the other control.

use chrono::NaiveDate;
use contracts::domain::a002_sale::{Sale, SaleEditPayload};
use contracts::enums::{DeliveryType, PaymentMethod};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaleFields {
    /// Raw text of the amount input
    pub amount: String,
    pub notes: String,
    pub payment_method: Option<PaymentMethod>,
    pub paid: Option<bool>,
    pub delivery_type: Option<DeliveryType>,
    /// Raw `YYYY-MM-DD` value of the date input
    pub shipping_date: String,
    pub has_change: bool,
}

/// Amount as typed back into an input: `1500`, `1500.5`
pub fn amount_input_text(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

impl SaleFields {
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            amount: amount_input_text(sale.amount),
            notes: sale.notes.clone(),
            payment_method: sale.payment(),
            paid: Some(sale.paid),
            delivery_type: sale.delivery(),
            shipping_date: sale
                .shipping_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            has_change: sale.has_change,
        }
    }

    pub fn is_payment_disabled(&self, method: PaymentMethod) -> bool {
        method == PaymentMethod::Cash && self.paid == Some(true)
    }

    pub fn is_paid_disabled(&self, value: bool) -> bool {
        value && self.payment_method == Some(PaymentMethod::Cash)
    }

    /// Returns false when the option is disabled
    pub fn select_payment(&mut self, method: PaymentMethod) -> bool {
        if self.is_payment_disabled(method) {
            return false;
        }
        self.payment_method = Some(method);
        if method == PaymentMethod::Cash {
            self.paid = Some(false);
        }
        true
    }

    /// Returns false when the option is disabled
    pub fn select_paid(&mut self, value: bool) -> bool {
        if self.is_paid_disabled(value) {
            return false;
        }
        self.paid = Some(value);
        true
    }

    pub fn select_delivery(&mut self, delivery: DeliveryType) {
        self.delivery_type = Some(delivery);
        if !delivery.requires_shipping_date() {
            self.shipping_date.clear();
        }
    }

    pub fn shows_shipping_date(&self) -> bool {
        self.delivery_type
            .map(|d| d.requires_shipping_date())
            .unwrap_or(false)
    }

    pub fn parse_amount(&self) -> Result<f64, String> {
        self.amount
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| "Ingrese un monto válido".to_string())
    }

    /// Shipping date for courier deliveries, `None` otherwise.
    /// With `min`, earlier dates are rejected.
    pub fn checked_shipping_date(&self, min: Option<NaiveDate>) -> Result<Option<NaiveDate>, String> {
        if !self.shows_shipping_date() {
            return Ok(None);
        }
        let raw = self.shipping_date.trim();
        if raw.is_empty() {
            return Err("Seleccione fecha de envío".to_string());
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| "Fecha de envío inválida".to_string())?;
        if let Some(min) = min {
            if date < min {
                return Err("La fecha de envío no puede ser anterior a hoy".to_string());
            }
        }
        Ok(Some(date))
    }

    /// Body for the explorer edit modal
    pub fn edit_payload(&self) -> Result<SaleEditPayload, String> {
        let amount = self.parse_amount()?;
        let shipping_date = self.checked_shipping_date(None)?;
        Ok(SaleEditPayload {
            amount,
            notes: self.notes.clone(),
            paid: self.paid.unwrap_or(false),
            payment_method: self.payment_method,
            delivery_type: self.delivery_type,
            shipping_date,
            has_change: self.has_change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_cash_blocks_paid_yes() {
        let mut f = SaleFields::default();
        assert!(f.select_payment(PaymentMethod::Cash));
        assert_eq!(f.paid, Some(false));
        assert!(f.is_paid_disabled(true));
        assert!(!f.is_paid_disabled(false));

        assert!(!f.select_paid(true));
        assert_eq!(f.paid, Some(false));

        // deselecting cash re-enables paid = yes
        assert!(f.select_payment(PaymentMethod::Card));
        assert!(!f.is_paid_disabled(true));
        assert!(f.select_paid(true));
        assert_eq!(f.paid, Some(true));
    }

    #[test]
    fn test_paid_yes_blocks_cash() {
        let mut f = SaleFields::default();
        assert!(f.select_paid(true));
        assert!(f.is_payment_disabled(PaymentMethod::Cash));
        assert!(!f.select_payment(PaymentMethod::Cash));
        assert_eq!(f.payment_method, None);

        assert!(f.select_payment(PaymentMethod::Transfer));
        assert_eq!(f.paid, Some(true));

        assert!(f.select_paid(false));
        assert!(f.select_payment(PaymentMethod::Cash));
    }

    #[test]
    fn test_shipping_date_only_for_courier() {
        let mut f = SaleFields::default();
        f.select_delivery(DeliveryType::Courier);
        assert!(f.shows_shipping_date());
        assert_eq!(
            f.checked_shipping_date(None),
            Err("Seleccione fecha de envío".to_string())
        );

        f.shipping_date = "2024-06-10".into();
        assert_eq!(f.checked_shipping_date(Some(d(2024, 6, 10))), Ok(Some(d(2024, 6, 10))));
        assert!(f.checked_shipping_date(Some(d(2024, 6, 11))).is_err());
        assert_eq!(f.checked_shipping_date(None), Ok(Some(d(2024, 6, 10))));

        f.select_delivery(DeliveryType::Pickup);
        assert!(!f.shows_shipping_date());
        assert_eq!(f.shipping_date, "");
        assert_eq!(f.checked_shipping_date(Some(d(2030, 1, 1))), Ok(None));
    }

    #[test]
    fn test_amount_parsing() {
        let mut f = SaleFields {
            amount: " 1500,5 ".into(),
            ..Default::default()
        };
        assert_eq!(f.parse_amount(), Ok(1500.5));
        f.amount = "abc".into();
        assert!(f.parse_amount().is_err());
        assert_eq!(amount_input_text(1500.0), "1500");
        assert_eq!(amount_input_text(99.5), "99.5");
    }

    #[test]
    fn test_edit_payload_from_sale() {
        let sale: Sale = serde_json::from_value(serde_json::json!({
            "id": 5, "amount": 2000.0, "payment_method": "card", "paid": true,
            "delivery_type": "cadeteria", "shipping_date": "2024-06-12",
            "notes": "timbre 2", "has_change": true
        }))
        .unwrap();
        let fields = SaleFields::from_sale(&sale);
        let payload = fields.edit_payload().unwrap();
        assert_eq!(payload.amount, 2000.0);
        assert!(payload.paid);
        assert_eq!(payload.shipping_date, Some(d(2024, 6, 12)));
        assert!(payload.has_change);
    }
}
