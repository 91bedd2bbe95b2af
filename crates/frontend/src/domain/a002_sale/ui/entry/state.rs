use crate::domain::a002_sale::ui::fields::SaleFields;
use crate::shared::request_seq::RequestSeq;
use chrono::NaiveDate;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_sale::{Sale, SalePayload};
use contracts::enums::{PaymentMethod, SALES_CHANNELS};

/// How long a just-saved row stays highlighted in the recent sales table
pub const HIGHLIGHT_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMode {
    #[default]
    Create,
    Edit(i64),
}

impl EntryMode {
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            EntryMode::Create => None,
            EntryMode::Edit(id) => Some(*id),
        }
    }

    pub fn title(&self) -> String {
        match self {
            EntryMode::Create => "Crear venta".to_string(),
            EntryMode::Edit(id) => format!("Editar venta #{}", id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            EntryMode::Create => "Crear venta",
            EntryMode::Edit(_) => "Guardar cambios",
        }
    }

    pub fn submit_class(&self) -> &'static str {
        match self {
            EntryMode::Create => "button button--primary",
            EntryMode::Edit(_) => "button button--success",
        }
    }
}

/// Pending "Editar" loads. Only the latest click may take over the form,
/// and resetting the form discards any load still in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditLoads {
    seq: RequestSeq,
}

impl EditLoads {
    pub fn begin(&mut self) -> u64 {
        self.seq.issue()
    }

    pub fn cancel(&mut self) {
        self.seq.issue();
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.seq.is_current(token)
    }

    /// Mode to switch to for a loaded sale, `None` when superseded
    pub fn accept(&self, token: u64, sale: &Sale) -> Option<EntryMode> {
        self.is_current(token).then_some(EntryMode::Edit(sale.id))
    }
}

/// Validate the entry form in the order the operator fills it in.
/// The shipping date may not be earlier than `today`.
pub fn build_sale_payload(
    customer: Option<&Customer>,
    channel: Option<&str>,
    fields: &SaleFields,
    today: NaiveDate,
) -> Result<SalePayload, String> {
    let customer = customer.ok_or_else(|| "Seleccione un cliente válido".to_string())?;
    let channel = channel
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| "Seleccione un punto de venta".to_string())?;
    let delivery_type = fields
        .delivery_type
        .ok_or_else(|| "Seleccione tipo de entrega".to_string())?;
    let shipping_date = fields.checked_shipping_date(Some(today))?;
    let amount = fields.parse_amount()?;

    Ok(SalePayload {
        customer_id: customer.id,
        amount,
        payment_method: fields.payment_method,
        paid: fields.paid.unwrap_or(false),
        notes: fields.notes.trim().to_string(),
        delivery_type,
        has_shipping: shipping_date.is_some(),
        shipping_date,
        sales_channel: channel.to_string(),
        is_cash: fields.payment_method == Some(PaymentMethod::Cash),
        has_change: fields.has_change,
    })
}

/// Customer and channel as the form shows them when editing `sale`
pub fn customer_of(sale: &Sale) -> Option<Customer> {
    sale.customer_id.map(|id| Customer {
        id,
        first_name: sale.customer_first_name.clone(),
        last_name: sale.customer_last_name.clone(),
        address: sale.customer_address.clone(),
        city: sale.customer_city.clone(),
        phone: sale.customer_phone.clone().unwrap_or_default(),
        description: None,
        created_at: None,
    })
}

/// Channel stored on a sale, mapped onto the form's options.
/// Values outside the options are kept so saving does not drop them.
pub fn channel_of(sale: &Sale) -> Option<String> {
    let stored = sale.sales_channel.as_deref()?.trim();
    if stored.is_empty() {
        return None;
    }
    let option = SALES_CHANNELS
        .iter()
        .find(|c| c.eq_ignore_ascii_case(stored))
        .copied()
        .unwrap_or(stored);
    Some(option.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::DeliveryType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn customer() -> Customer {
        Customer {
            id: 7,
            first_name: "Ana".into(),
            last_name: "Gómez".into(),
            address: "Calle 1".into(),
            city: "Quilmes".into(),
            phone: "123".into(),
            description: None,
            created_at: None,
        }
    }

    fn filled() -> SaleFields {
        let mut f = SaleFields {
            amount: "1500".into(),
            ..Default::default()
        };
        f.select_payment(PaymentMethod::Cash);
        f.select_delivery(DeliveryType::Pickup);
        f
    }

    #[test]
    fn test_validation_order() {
        let c = customer();
        let f = filled();
        assert_eq!(
            build_sale_payload(None, Some("Local"), &f, today()).unwrap_err(),
            "Seleccione un cliente válido"
        );
        assert_eq!(
            build_sale_payload(Some(&c), None, &f, today()).unwrap_err(),
            "Seleccione un punto de venta"
        );
        let mut no_delivery = f.clone();
        no_delivery.delivery_type = None;
        assert_eq!(
            build_sale_payload(Some(&c), Some("Local"), &no_delivery, today()).unwrap_err(),
            "Seleccione tipo de entrega"
        );
        let mut courier = f.clone();
        courier.select_delivery(DeliveryType::Courier);
        assert_eq!(
            build_sale_payload(Some(&c), Some("Local"), &courier, today()).unwrap_err(),
            "Seleccione fecha de envío"
        );
    }

    #[test]
    fn test_past_shipping_date_rejected() {
        let c = customer();
        let mut f = filled();
        f.select_delivery(DeliveryType::Courier);
        f.shipping_date = "2024-06-09".into();
        assert!(build_sale_payload(Some(&c), Some("Local"), &f, today()).is_err());

        f.shipping_date = "2024-06-10".into();
        let payload = build_sale_payload(Some(&c), Some("Local"), &f, today()).unwrap();
        assert!(payload.has_shipping);
        assert_eq!(payload.shipping_date, Some(today()));
    }

    #[test]
    fn test_cash_payload() {
        let c = customer();
        let payload = build_sale_payload(Some(&c), Some("WhatsApp"), &filled(), today()).unwrap();
        assert_eq!(payload.customer_id, 7);
        assert!(payload.is_cash);
        assert!(!payload.paid);
        assert!(!payload.has_shipping);
        assert_eq!(payload.sales_channel, "WhatsApp");
        assert_eq!(payload.amount, 1500.0);
    }

    #[test]
    fn test_channel_of_stored_sale() {
        let mut sale: Sale =
            serde_json::from_value(serde_json::json!({"id": 1, "amount": 10, "sales_channel": "local"}))
                .unwrap();
        assert_eq!(channel_of(&sale).as_deref(), Some("Local"));
        sale.sales_channel = Some("feria".into());
        assert_eq!(channel_of(&sale).as_deref(), Some("feria"));
        sale.sales_channel = None;
        assert_eq!(channel_of(&sale), None);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(EntryMode::Create.title(), "Crear venta");
        assert_eq!(EntryMode::Edit(4).title(), "Editar venta #4");
        assert_eq!(EntryMode::Edit(4).submit_label(), "Guardar cambios");
        assert_eq!(EntryMode::Edit(4).editing_id(), Some(4));
    }

    #[test]
    fn test_later_edit_click_wins() {
        let sale = |id: i64| -> Sale {
            serde_json::from_value(serde_json::json!({"id": id, "amount": 100})).unwrap()
        };
        let mut loads = EditLoads::default();
        let first = loads.begin();
        let second = loads.begin();

        assert_eq!(loads.accept(second, &sale(2)), Some(EntryMode::Edit(2)));
        assert_eq!(loads.accept(first, &sale(1)), None);

        let pending = loads.begin();
        loads.cancel();
        assert_eq!(loads.accept(pending, &sale(3)), None);
    }
}
