use serde::{Deserialize, Serialize};

/// How a sale reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    /// Courier delivery on a scheduled shipping date
    #[serde(rename = "cadeteria")]
    Courier,
    /// Customer picks the order up at the store
    #[serde(rename = "retiro")]
    Pickup,
    /// Sent by post
    #[serde(rename = "correo")]
    Mail,
}

impl DeliveryType {
    /// Wire code used by the back office API
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryType::Courier => "cadeteria",
            DeliveryType::Pickup => "retiro",
            DeliveryType::Mail => "correo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryType::Courier => "📦 Cadetería",
            DeliveryType::Pickup => "🏪 Retiro",
            DeliveryType::Mail => "📮 Correo",
        }
    }

    pub fn all() -> Vec<DeliveryType> {
        vec![DeliveryType::Courier, DeliveryType::Pickup, DeliveryType::Mail]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cadeteria" => Some(DeliveryType::Courier),
            "retiro" => Some(DeliveryType::Pickup),
            "correo" => Some(DeliveryType::Mail),
            _ => None,
        }
    }

    /// Only courier deliveries carry a shipping date
    pub fn requires_shipping_date(&self) -> bool {
        matches!(self, DeliveryType::Courier)
    }
}

/// Display name for a delivery code as it comes from aggregated reports,
/// falling back to the raw code for values the client does not know.
pub fn delivery_display_name(code: Option<&str>) -> String {
    match code {
        Some(c) => DeliveryType::from_code(c)
            .map(|d| d.display_name().to_string())
            .unwrap_or_else(|| c.to_string()),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for dt in DeliveryType::all() {
            let json = serde_json::to_string(&dt).unwrap();
            assert_eq!(json, format!("\"{}\"", dt.code()));
            assert_eq!(DeliveryType::from_code(dt.code()), Some(dt));
        }
    }

    #[test]
    fn test_only_courier_requires_date() {
        assert!(DeliveryType::Courier.requires_shipping_date());
        assert!(!DeliveryType::Pickup.requires_shipping_date());
        assert!(!DeliveryType::Mail.requires_shipping_date());
    }

    #[test]
    fn test_unknown_code_display() {
        assert_eq!(delivery_display_name(Some("moto")), "moto");
        assert_eq!(delivery_display_name(Some("retiro")), "🏪 Retiro");
        assert_eq!(delivery_display_name(None), "-");
    }
}
