//! Channels that have a pending/overdue worklist and the age rule of each.
//!
//! A row is overdue when its age is strictly greater than the channel
//! threshold. The server's precomputed `overdue` flag and `days_since_creation`
//! win over anything computed locally from `created_at`.

use crate::domain::a002_sale::Sale;
use crate::shared::timestamp::parse_timestamp;
use chrono::NaiveDateTime;

/// Worklists backed by a stats endpoint and a single completion action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryChannel {
    /// Exchanges waiting for the returned item
    Changes,
    /// Store pickups waiting for the customer
    Pickup,
    /// Postal orders waiting to be shipped
    Mail,
}

/// Elapsed time since a sale was created, in the unit its channel measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Age {
    Hours(i64),
    Days(i64),
}

impl Age {
    pub fn value(&self) -> i64 {
        match self {
            Age::Hours(v) | Age::Days(v) => *v,
        }
    }

    /// "49 hs" or "16 días"
    pub fn label(&self) -> String {
        match self {
            Age::Hours(h) => format!("{} hs", h),
            Age::Days(d) => format!("{} días", d),
        }
    }
}

impl DeliveryChannel {
    pub fn all() -> Vec<DeliveryChannel> {
        vec![
            DeliveryChannel::Changes,
            DeliveryChannel::Pickup,
            DeliveryChannel::Mail,
        ]
    }

    /// Overdue threshold; an age equal to it is still on time
    pub fn threshold(&self) -> Age {
        match self {
            DeliveryChannel::Changes => Age::Hours(48),
            DeliveryChannel::Pickup => Age::Days(15),
            DeliveryChannel::Mail => Age::Days(10),
        }
    }

    pub fn stats_path(&self) -> &'static str {
        match self {
            DeliveryChannel::Changes => "/changes/stats",
            DeliveryChannel::Pickup => "/delivery/retiro/stats",
            DeliveryChannel::Mail => "/delivery/correo/stats",
        }
    }

    pub fn action_path(&self, sale_id: i64) -> String {
        match self {
            DeliveryChannel::Changes => format!("/changes/{}/mark-received", sale_id),
            DeliveryChannel::Pickup => format!("/delivery/retiro/{}/mark-delivered", sale_id),
            DeliveryChannel::Mail => format!("/delivery/correo/{}/mark-shipped", sale_id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeliveryChannel::Changes => "🔄 Cambios",
            DeliveryChannel::Pickup => "🏪 Retiros",
            DeliveryChannel::Mail => "📮 Correo",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            DeliveryChannel::Changes => "✅ Recibido",
            DeliveryChannel::Pickup => "Entregado",
            DeliveryChannel::Mail => "Enviado",
        }
    }

    pub fn confirm_text(&self, sale_id: i64) -> String {
        match self {
            DeliveryChannel::Changes => format!("¿Marcar cambio #{} como recibido?", sale_id),
            DeliveryChannel::Pickup => format!("¿Marcar pedido #{} como entregado?", sale_id),
            DeliveryChannel::Mail => format!("¿Marcar pedido #{} como enviado?", sale_id),
        }
    }

    /// Fallback toast when a failed action carries no `error`
    pub fn action_error(&self) -> &'static str {
        match self {
            DeliveryChannel::Changes => "Error al marcar como recibido",
            DeliveryChannel::Pickup => "Error al marcar como entregado",
            DeliveryChannel::Mail => "Error al marcar como enviado",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            DeliveryChannel::Changes => "No hay cambios",
            _ => "No hay pedidos",
        }
    }

    pub fn overdue_heading(&self) -> &'static str {
        match self {
            DeliveryChannel::Mail => "Demorados",
            _ => "Vencidos",
        }
    }

    /// Mail rows show where the parcel goes; the others show who to call
    pub fn shows_address(&self) -> bool {
        matches!(self, DeliveryChannel::Mail)
    }

    /// Age of a sale in this channel's unit.
    ///
    /// Day-based channels trust `days_since_creation` when the server sends it.
    /// Missing or unparseable timestamps count as age 0.
    pub fn age(&self, sale: &Sale, now: NaiveDateTime) -> Age {
        let created = sale.created_at.as_deref().and_then(parse_timestamp);
        match self.threshold() {
            Age::Hours(_) => {
                let hours = created
                    .map(|c| (now - c).num_hours())
                    .unwrap_or(0);
                Age::Hours(hours)
            }
            Age::Days(_) => {
                let days = sale.days_since_creation.unwrap_or_else(|| {
                    created.map(|c| (now - c).num_days()).unwrap_or(0)
                });
                Age::Days(days)
            }
        }
    }

    /// Overdue status of a sale, trusting the server flag when present
    pub fn is_overdue(&self, sale: &Sale, now: NaiveDateTime) -> bool {
        if let Some(flag) = sale.overdue {
            return flag;
        }
        self.exceeds_threshold(self.age(sale, now))
    }

    pub fn exceeds_threshold(&self, age: Age) -> bool {
        age.value() > self.threshold().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sale_created(ago: Duration) -> Sale {
        let created = (now() - ago).format("%Y-%m-%dT%H:%M:%S").to_string();
        let json = serde_json::json!({
            "id": 1, "amount": 100.0, "created_at": created
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_changes_hour_boundary() {
        let ch = DeliveryChannel::Changes;
        let at = sale_created(Duration::hours(48));
        assert_eq!(ch.age(&at, now()), Age::Hours(48));
        assert!(!ch.is_overdue(&at, now()));

        let past = sale_created(Duration::hours(49));
        assert!(ch.is_overdue(&past, now()));

        // 48h59m still floors to 48
        let almost = sale_created(Duration::hours(48) + Duration::minutes(59));
        assert!(!ch.is_overdue(&almost, now()));
    }

    #[test]
    fn test_pickup_and_mail_day_boundaries() {
        let pickup = DeliveryChannel::Pickup;
        assert!(!pickup.is_overdue(&sale_created(Duration::days(15)), now()));
        assert!(pickup.is_overdue(&sale_created(Duration::days(16)), now()));

        let mail = DeliveryChannel::Mail;
        assert!(!mail.is_overdue(&sale_created(Duration::days(10)), now()));
        assert!(mail.is_overdue(&sale_created(Duration::days(11)), now()));
    }

    #[test]
    fn test_server_fields_win() {
        let mail = DeliveryChannel::Mail;

        let mut sale = sale_created(Duration::days(1));
        sale.days_since_creation = Some(11);
        assert_eq!(mail.age(&sale, now()), Age::Days(11));
        assert!(mail.is_overdue(&sale, now()));

        let mut flagged = sale_created(Duration::days(30));
        flagged.overdue = Some(false);
        assert!(!mail.is_overdue(&flagged, now()));
    }

    #[test]
    fn test_missing_timestamp_is_fresh() {
        let sale: Sale = serde_json::from_value(serde_json::json!({"id": 2, "amount": 1})).unwrap();
        assert_eq!(DeliveryChannel::Changes.age(&sale, now()), Age::Hours(0));
        assert!(!DeliveryChannel::Pickup.is_overdue(&sale, now()));
    }

    #[test]
    fn test_age_labels_and_paths() {
        assert_eq!(Age::Hours(49).label(), "49 hs");
        assert_eq!(Age::Days(16).label(), "16 días");
        assert_eq!(
            DeliveryChannel::Mail.action_path(5),
            "/delivery/correo/5/mark-shipped"
        );
        assert_eq!(DeliveryChannel::Changes.stats_path(), "/changes/stats");
    }
}
